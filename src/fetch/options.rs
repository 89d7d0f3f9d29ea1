use std::time::Duration;

/// Per-request behavior switches. Everything defaults to off: no caching,
/// no invalidation, no entry expiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Memoize the response under the request's cache key and reuse it for
    /// identical requests. Only GET requests are ever cached.
    pub with_store_cache: bool,
    /// Drop any cached entry for this key before the request runs.
    pub invalidate_cache: bool,
    /// Cached entries older than this are evicted on access instead of
    /// reused. `None` keeps entries forever.
    pub remove_cache_timeout: Option<Duration>,
}

impl FetchOptions {
    /// The common case: cached, never expiring.
    pub fn cached() -> Self {
        FetchOptions {
            with_store_cache: true,
            ..Default::default()
        }
    }
}
