//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for AssetDesk
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AssetDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssetDeskError {
    /// Whether the failure is transient and worth surfacing as a dismissible
    /// notice rather than a hard failure.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Auth(_))
    }
}

/// Result type alias for AssetDesk operations
pub type Result<T> = std::result::Result<T, AssetDeskError>;
