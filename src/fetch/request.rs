use reqwest::Method;

use super::options::FetchOptions;

/// Descriptor of one backend request: endpoint path relative to the API
/// base, method, query parameters and fetch options.
#[derive(Debug, Clone)]
pub struct ListRequest {
    path: String,
    method: Method,
    query: Vec<(String, String)>,
    options: FetchOptions,
}

impl ListRequest {
    /// GET request with no parameters and default options.
    pub fn get(path: impl Into<String>) -> Self {
        ListRequest {
            path: path.into(),
            method: Method::GET,
            query: Vec::new(),
            options: FetchOptions::default(),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Appends one query pair.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    pub fn options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn fetch_options(&self) -> FetchOptions {
        self.options
    }

    /// Cache key: the path plus the canonicalized (sorted, urlencoded)
    /// query, so requests differing only in parameter order share a key.
    pub fn cache_key(&self) -> String {
        let mut pairs = self.query.clone();
        pairs.sort();

        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();

        format!("{}?{}", self.path, encoded)
    }
}
