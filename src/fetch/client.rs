use std::sync::Arc;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::{ConfigError, Settings};

use super::cache::ResponseCache;
use super::envelope::ResultEnvelope;
use super::error::FetchError;
use super::request::ListRequest;

/// HTTP client for the portal backend.
///
/// Carries the resolved base URL and the response cache; clones share both.
#[derive(Clone)]
pub struct FetchClient {
    http: Client,
    base_url: Url,
    cache: Arc<ResponseCache>,
}

impl FetchClient {
    /// Builds a client from validated settings. Fails when the settings
    /// cannot resolve a usable base URL.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let mut base_url = settings.api_base_url()?;

        // `Url::join` treats a path without a trailing slash as a file and
        // would replace its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(settings.http.request_timeout())
            .connect_timeout(settings.http.connect_timeout())
            .build()
            .expect("Failed to build HTTP client");

        Ok(FetchClient {
            http,
            base_url,
            cache: Arc::new(ResponseCache::default()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::BaseUrl {
                path: path.to_string(),
                source: e,
            })
    }

    /// Runs a list request and normalizes the response into an envelope.
    ///
    /// GET requests with `with_store_cache` set consult the shared cache
    /// first; see `FetchOptions` for invalidation and expiry. Non-GET
    /// requests never touch the cache.
    pub async fn list<T: DeserializeOwned>(
        &self,
        request: &ListRequest,
    ) -> Result<ResultEnvelope<T>, FetchError> {
        let url = self.endpoint_url(request.path())?;
        let options = request.fetch_options();
        let cacheable = options.with_store_cache && *request.method() == Method::GET;
        let key = request.cache_key();

        if cacheable {
            if options.invalidate_cache {
                self.cache.invalidate(&key);
            } else if let Some(value) = self.cache.lookup(&key, options.remove_cache_timeout) {
                tracing::debug!(key = %key, "cache hit");
                return Self::normalize(&url, value);
            }
            tracing::debug!(key = %key, "cache miss");
        }

        let value = self.execute(request, &url).await?;

        if cacheable {
            self.cache.store(key, value.clone());
        }

        Self::normalize(&url, value)
    }

    /// Fetches a single resource.
    pub async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let request = ListRequest::get(path);
        let url = self.endpoint_url(path)?;
        let value = self.execute(&request, &url).await?;

        serde_json::from_value(value).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }

    async fn execute(&self, request: &ListRequest, url: &Url) -> Result<Value, FetchError> {
        let mut builder = self.http.request(request.method().clone(), url.clone());
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }

        tracing::debug!(method = %request.method(), url = %url, "request");

        let response = builder.send().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }

    fn normalize<T: DeserializeOwned>(
        url: &Url,
        value: Value,
    ) -> Result<ResultEnvelope<T>, FetchError> {
        let raw = ResultEnvelope::from_value(value).map_err(|e| FetchError::Envelope {
            url: url.to_string(),
            source: e,
        })?;

        raw.into_typed().map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
