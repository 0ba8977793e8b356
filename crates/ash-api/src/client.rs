use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("API returned {status}")]
    ApiResponse { status: StatusCode, body: String },
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Minimal HTTP client bound to a single server base URL.
///
/// Only HTTP 200 is treated as success. Idle connections are not kept, so
/// every request opens its own connection.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a client for `base_url`.
    ///
    /// The base URL is treated as a directory: `http://host/prefix` resolves
    /// `health` to `http://host/prefix/health`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let inner = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self { inner, base_url })
    }

    /// Resolve `path` against the base URL and append `query` as
    /// form-encoded pairs.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET `{base_url}/{path}?{query}` and deserialize the JSON object in the
    /// response body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let resp = self.send_get(path, query).await?;
        Self::handle_response(resp).await
    }

    /// GET `{base_url}/{path}` and return the raw response without checking
    /// its status.
    pub async fn send_get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path, query)?;
        debug!(%url, "GET");
        self.inner.get(url).send().await.map_err(ApiError::Request)
    }

    /// Return the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::ApiResponse { status, body });
        }
        let bytes = resp.bytes().await.map_err(ApiError::Body)?;
        // Derived struct visitors also accept sequences; responses must be objects.
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        if !value.is_object() {
            return Err(ApiError::Decode(serde::de::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            ))));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
