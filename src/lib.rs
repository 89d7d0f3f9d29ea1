//! Client-side core of the multilateral fund portal: a dependency-injected
//! state store composed of feature slices, a path-based view resolver, and
//! a caching fetch layer that normalizes backend list responses into typed
//! models.
//!
//! The `portal` binary wires these together; everything here is usable as a
//! library against any portal deployment.

pub mod api;
pub mod config;
pub mod fetch;
pub mod state;
pub mod store;
pub mod views;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing to stderr.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Timestamps are
/// UTC so logs from differently-zoned deployments line up.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
