//! Authenticated JSON client for the inventory backend
//!
//! Wraps [`HttpClient`] with base URL handling, bearer authentication, an
//! overall timeout and status code classification.

use std::sync::Arc;
use std::time::Duration;

use assetdesk_domain::ApiConfig;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Backend origin, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Overall timeout per call, retries included
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// REST client that attaches the session token to every call
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    auth: Arc<dyn AccessTokenProvider>,
    config: ApiClientConfig,
}

impl ApiClient {
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(3)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self {
            http_client: Arc::new(http_client),
            auth,
            config,
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Execute a GET request and decode the JSON body.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None).await?;
        let result = Self::decode(response).await?;
        info!(path = %path, "GET request successful");
        Ok(result)
    }

    /// Execute a POST request with a JSON body and decode the JSON reply.
    ///
    /// POST is never retried by the transport.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Client(format!("Failed to serialize body: {}", e)))?;
        let response = self.execute(Method::POST, path, Some(body)).await?;
        let result = Self::decode(response).await?;
        info!(path = %path, "POST request successful");
        Ok(result)
    }

    /// Execute a DELETE request; any success status counts, the body is ignored.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None).await?;
        info!(path = %path, "DELETE request successful");
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        debug!(url = %url, %method, "API request");

        let token = self.auth.access_token().await?;
        let mut request: RequestBuilder = self
            .http_client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let timeout = self.config.timeout;
        let send = self.http_client.send(request);
        let response = match tokio::time::timeout(timeout, send).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(ApiError::from(err)),
            Err(_) => return Err(ApiError::Timeout(timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = Self::map_status_error(status, &url, body);
            warn!(
                url = %url,
                status = status.as_u16(),
                category = ?err.category(),
                retryable = err.should_retry(),
                "API request failed"
            );
            return Err(err);
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        // 204/205 carry no body
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "No content response ({}), but the response type needs a body",
                    status.as_u16()
                ))
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        let message = match Self::backend_message(&body) {
            Some(detail) => format!("{} returned status {}: {}", url, status, detail),
            None if body.is_empty() => format!("{} returned status {}", url, status),
            None => format!("{} returned status {}: {}", url, status, body),
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status == StatusCode::NOT_FOUND {
            ApiError::NotFound(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }

    /// The backend reports failures as `{"message": "..."}`.
    fn backend_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("message")?.as_str().map(str::to_string)
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl ApiClientBuilder {
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// # Errors
    ///
    /// Returns error if the auth provider is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth = self
            .auth
            .ok_or_else(|| ApiError::Config("Auth provider not set".to_string()))?;

        ApiClient::new(config, auth)
    }
}
