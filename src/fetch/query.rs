use std::future::Future;

use super::error::FetchError;

/// Request-scoped fetch state: what a caller polls to drive a listing.
///
/// A fresh query is neither loading nor loaded. [`Query::run`] drives one
/// fetch and settles the query exactly once: success stores the data and
/// marks it loaded, failure stores the error. Dropping a query mid-flight
/// just discards the eventual result along with the future.
#[derive(Debug)]
pub struct Query<T> {
    data: Option<T>,
    error: Option<FetchError>,
    loading: bool,
    loaded: bool,
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Query {
            data: None,
            error: None,
            loading: false,
            loaded: false,
        }
    }

    /// Drives one fetch to completion, recording the outcome.
    pub async fn run<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        self.loading = true;
        self.error = None;

        match fetch.await {
            Ok(data) => {
                self.data = Some(data);
                self.loaded = true;
            }
            Err(error) => {
                tracing::warn!(error = %error, "fetch failed");
                self.error = Some(error);
                self.loaded = false;
            }
        }

        self.loading = false;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Consumes the query, yielding the data when it loaded.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}
