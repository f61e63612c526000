//! REST client error types
//!
//! Classifies inventory backend failures and carries retry metadata.

use std::time::Duration;

use assetdesk_domain::AssetDeskError;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - the session must be renewed
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Configuration and response shape errors - non-retryable
    Config,
}

/// Inventory backend errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::NotFound(_) | Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) | Self::Decode(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether a caller could reasonably try again later.
    ///
    /// Auth failures are not retryable: the token comes from an explicit
    /// session and nothing here can refresh it.
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::RateLimit | ApiErrorCategory::Server | ApiErrorCategory::Network
        )
    }

    /// Suggested retry delay in seconds
    pub fn retry_delay_secs(&self) -> u64 {
        match self.category() {
            ApiErrorCategory::RateLimit => 60,
            ApiErrorCategory::Server => 10,
            ApiErrorCategory::Network => 5,
            ApiErrorCategory::Authentication
            | ApiErrorCategory::Client
            | ApiErrorCategory::Config => 0,
        }
    }
}

impl From<AssetDeskError> for ApiError {
    fn from(err: AssetDeskError) -> Self {
        match err {
            AssetDeskError::Network(message) => Self::Network(message),
            AssetDeskError::Auth(message) => Self::Auth(message),
            AssetDeskError::Config(message) => Self::Config(message),
            AssetDeskError::NotFound(message) => Self::NotFound(message),
            AssetDeskError::InvalidInput(message) => Self::Client(message),
            AssetDeskError::Decode(message) => Self::Decode(message),
            AssetDeskError::Io(message) | AssetDeskError::Internal(message) => {
                Self::Server(message)
            }
        }
    }
}

impl From<ApiError> for AssetDeskError {
    fn from(err: ApiError) -> Self {
        let message = if err.should_retry() {
            format!("{err} (retry in {}s)", err.retry_delay_secs())
        } else {
            err.to_string()
        };
        match err {
            ApiError::Auth(_) => Self::Auth(message),
            ApiError::RateLimit(_)
            | ApiError::Server(_)
            | ApiError::Network(_)
            | ApiError::Timeout(_) => Self::Network(message),
            ApiError::NotFound(_) => Self::NotFound(message),
            ApiError::Client(_) => Self::InvalidInput(message),
            ApiError::Config(_) => Self::Config(message),
            ApiError::Decode(_) => Self::Decode(message),
        }
    }
}
