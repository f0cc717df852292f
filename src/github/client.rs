//! GitHub client
//!
//! Thin layer tying the authenticated HTTP client to the paginated fetcher.

use crate::auth::{AuthConfig, Credentials};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{PaginatedFetcher, PaginationConfig};
use crate::response::ApiResponse;
use crate::types::Method;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Environment variable overriding the API base URL
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

/// Authenticated GitHub API client
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    fetcher: PaginatedFetcher,
}

impl GitHubClient {
    /// Create a client with explicit configuration and credentials
    pub fn new(config: HttpClientConfig, credentials: Credentials) -> Result<Self> {
        let http = HttpClient::with_auth(config, AuthConfig::bearer(credentials))?;
        Ok(Self {
            fetcher: PaginatedFetcher::new(http),
        })
    }

    /// Create a client from `GITHUB_TOKEN` and optional `GITHUB_API_URL`
    ///
    /// Fails before any request is made when the token is missing.
    pub fn from_env(config: HttpClientConfig) -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let config = match std::env::var(API_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => HttpClientConfig {
                base_url: url.trim().to_string(),
                ..config
            },
            _ => config,
        };
        Self::new(config, credentials)
    }

    /// Use a different pagination strategy for list calls
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.fetcher = self.fetcher.with_pagination(pagination);
        self
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        self.fetcher.client()
    }

    /// GET an endpoint, following pagination for list responses
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.get_with_query(path, &HashMap::new()).await
    }

    /// GET an endpoint with query parameters, following pagination
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &HashMap<String, String>,
    ) -> Result<ApiResponse> {
        debug!("GET {path}");
        self.fetcher.fetch_all(path, query).await
    }

    /// POST a JSON body
    pub async fn post(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// PATCH a JSON body
    pub async fn patch(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    /// PUT a JSON body
    pub async fn put(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// DELETE a resource
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::DELETE, path, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse> {
        debug!("{method} {path}");
        let mut config = RequestConfig::new();
        config.body = body;
        self.http().request_value(method, path, config).await
    }
}
