use thiserror::Error;

use super::envelope::EnvelopeError;

/// Errors surfaced by the fetch layer. One request produces at most one of
/// these; there is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid request URL for '{path}': {source}")]
    BaseUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response shape from {url}: {source}")]
    Envelope {
        url: String,
        #[source]
        source: EnvelopeError,
    },
}

impl FetchError {
    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
