use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

/// Where the portal backend lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Full base URL (e.g. "https://portal.example.org"). Wins over
    /// host/protocol when set.
    pub base_url: Option<String>,
    /// Backend host, combined with `protocol` when `base_url` is unset.
    pub host: Option<String>,
    /// Scheme used with `host` ("https" when unset).
    pub protocol: Option<String>,
}

/// HTTP client tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl HttpSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}
