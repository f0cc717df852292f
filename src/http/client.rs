//! Request plumbing for the GitHub REST API
//!
//! Relative paths are resolved against the configured API root, every
//! request carries the GitHub media type and API version, and anything
//! other than a 2xx status comes back as an error.

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::response::ApiResponse;
use crate::types::Method;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Public GitHub REST API root
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const GITHUB_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/vnd.github+json"),
    ("X-GitHub-Api-Version", "2022-11-28"),
];

/// Connection settings shared by every request
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// API root; GitHub Enterprise uses `https://<host>/api/v3`
    pub base_url: String,
    /// Upper bound on a single request, including reading the body
    pub timeout: Duration,
    pub default_headers: HashMap<String, String>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            default_headers: GITHUB_HEADERS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Starts from the GitHub defaults
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Extra header on every request; replaces a default of the same name
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Per-call additions: query string, headers and a JSON body
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub query: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Merge `params` into the query; later values win
    #[must_use]
    pub fn queries(mut self, params: &HashMap<String, String>) -> Self {
        self.query
            .extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// One connection pool for a whole run
///
/// Clones share the pool, so hand them out freely to concurrent tasks.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Unauthenticated client against public GitHub
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Fails if `base_url` is not an absolute URL
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            authenticator: Authenticator::default(),
        })
    }

    pub fn with_auth(config: HttpClientConfig, auth: AuthConfig) -> Result<Self> {
        Ok(Self {
            authenticator: Authenticator::new(auth),
            ..Self::with_config(config)?
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request(Method::GET, url, RequestConfig::default())
            .await
    }

    pub async fn get_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::GET, url, config).await
    }

    /// Send one request; only a 2xx response comes back as `Ok`
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let full_url = self.build_url(url);
        let response = self
            .prepare(method, &full_url, &config)
            .send()
            .await
            .map_err(|e| self.transport_error(method, &full_url, e))?;

        let status = response.status();
        if status.is_success() {
            debug!("{method} {full_url} -> {}", status.as_u16());
            return Ok(response);
        }

        warn!("{method} {full_url} returned {}", status.as_u16());
        Err(Error::HttpStatus {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }

    /// Read the body of a response from [`request`](Self::request)
    ///
    /// The client timeout also bounds this read.
    pub async fn read_text(&self, method: Method, response: Response) -> Result<String> {
        let full_url = response.url().to_string();
        response
            .text()
            .await
            .map_err(|e| self.transport_error(method, &full_url, e))
    }

    fn prepare(&self, method: Method, full_url: &str, config: &RequestConfig) -> RequestBuilder {
        let req = self
            .config
            .default_headers
            .iter()
            .chain(&config.headers)
            .fold(self.client.request(method.into(), full_url), |req, (k, v)| {
                req.header(k.as_str(), v.as_str())
            });
        let req = if config.query.is_empty() {
            req
        } else {
            req.query(&config.query)
        };
        let req = match &config.body {
            Some(body) => req.json(body),
            None => req,
        };
        self.authenticator.apply(req)
    }

    fn transport_error(&self, method: Method, full_url: &str, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            warn!("{method} {full_url} timed out after {:?}", self.config.timeout);
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            warn!("{method} {full_url} failed: {e}");
            Error::Http(e)
        }
    }

    /// Like [`request`](Self::request), with the body decoded
    ///
    /// A DELETE answered with 200 or 204 yields `true`.
    pub async fn request_value(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<ApiResponse> {
        let response = self.request(method, url, config).await?;
        let deleted = method == Method::DELETE
            && matches!(response.status(), StatusCode::OK | StatusCode::NO_CONTENT);
        let text = self.read_text(method, response).await?;

        Ok(ApiResponse::new(if deleted {
            Value::Bool(true)
        } else {
            decode_body(&text)
        }))
    }

    async fn send_json(&self, method: Method, url: &str, body: Value) -> Result<ApiResponse> {
        self.request_value(method, url, RequestConfig::new().json(body))
            .await
    }

    pub async fn post(&self, url: &str, body: Value) -> Result<ApiResponse> {
        self.send_json(Method::POST, url, body).await
    }

    pub async fn patch(&self, url: &str, body: Value) -> Result<ApiResponse> {
        self.send_json(Method::PATCH, url, body).await
    }

    pub async fn put(&self, url: &str, body: Value) -> Result<ApiResponse> {
        self.send_json(Method::PUT, url, body).await
    }

    pub async fn delete(&self, url: &str) -> Result<ApiResponse> {
        self.request_value(Method::DELETE, url, RequestConfig::default())
            .await
    }

    /// Absolute URLs (from `Link` headers) pass through untouched
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("authenticated", &self.authenticator.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Decode a 2xx response body
///
/// Empty bodies become `null`; bodies that are not JSON are kept as a
/// JSON string.
pub fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
