use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::types::Settings;

/// Environment variable overriding `api.base_url`.
pub const ENV_API_BASE_URL: &str = "PORTAL_API_BASE_URL";
/// Environment variable overriding `api.host`.
pub const ENV_HOST: &str = "PORTAL_HOST";
/// Environment variable overriding `api.protocol`.
pub const ENV_PROTOCOL: &str = "PORTAL_PROTOCOL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid API base URL '{value}': {source}")]
    BaseUrlError {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Settings {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/portal-client/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("portal-client").join("config.toml")
    }

    /// Loads configuration from the default config file and the process
    /// environment.
    ///
    /// - If the file doesn't exist, starts from `Settings::default()`.
    /// - Environment variables override file values.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        let content = if path.exists() {
            Some(
                fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                    path: path.clone(),
                    source: e,
                })?,
            )
        } else {
            None
        };

        Self::from_sources(content.as_deref(), &path, |name| std::env::var(name).ok())
    }

    /// Loads configuration from an explicit file, which must exist, plus the
    /// process environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_sources(Some(&content), path, |name| std::env::var(name).ok())
    }

    /// Core loader: parse the optional TOML content, apply environment
    /// overrides through the given lookup, validate. `path` is only used in
    /// error messages. Tests inject both sources directly.
    pub fn from_sources(
        content: Option<&str>,
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings: Settings = match content {
            Some(content) => toml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?,
            None => Settings::default(),
        };

        if let Some(value) = env(ENV_API_BASE_URL) {
            settings.api.base_url = Some(value);
        }
        if let Some(value) = env(ENV_HOST) {
            settings.api.host = Some(value);
        }
        if let Some(value) = env(ENV_PROTOCOL) {
            settings.api.protocol = Some(value);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Validates the configuration.
    ///
    /// Checks that a usable API base URL can be resolved from the
    /// configured values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_base_url().map(|_| ())
    }

    /// Resolves the backend base URL.
    ///
    /// An explicit `api.base_url` wins; otherwise `protocol` and `host`
    /// compose one, with the protocol defaulting to `https`. The result
    /// must be an absolute http/https URL with a host.
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        let raw = match (&self.api.base_url, &self.api.host) {
            (Some(base_url), _) => base_url.clone(),
            (None, Some(host)) => {
                let protocol = self.api.protocol.as_deref().unwrap_or("https");
                format!("{protocol}://{host}")
            }
            (None, None) => {
                return Err(ConfigError::ValidationError {
                    message: "No API base URL configured: set api.base_url, or api.host \
                              with an optional api.protocol"
                        .to_string(),
                });
            }
        };

        let url = Url::parse(&raw).map_err(|e| ConfigError::BaseUrlError {
            value: raw.clone(),
            source: e,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("API base URL '{raw}' must use http or https"),
            });
        }

        if url.host_str().is_none() {
            return Err(ConfigError::ValidationError {
                message: format!("API base URL '{raw}' has no host"),
            });
        }

        Ok(url)
    }
}
