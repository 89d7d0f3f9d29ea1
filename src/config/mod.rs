//! Configuration: TOML file plus environment overrides, validated before
//! anything else runs.

mod loader;
mod types;

pub use loader::{ConfigError, ENV_API_BASE_URL, ENV_HOST, ENV_PROTOCOL};
pub use types::{ApiSettings, HttpSettings, Settings};
