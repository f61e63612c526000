//! Bearer token providers for the inventory backend
//!
//! The token is issued by a login flow outside this program and handed in
//! through an explicit [`Session`]; nothing here stores or refreshes it.

use async_trait::async_trait;
use assetdesk_domain::Session;
use tracing::debug;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the token to send as `Authorization: Bearer <token>`.
    async fn access_token(&self) -> Result<String, ApiError>;
}

/// Token provider backed by the current [`Session`]
#[derive(Debug, Clone)]
pub struct SessionTokenProvider {
    session: Session,
}

impl SessionTokenProvider {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[async_trait]
impl AccessTokenProvider for SessionTokenProvider {
    async fn access_token(&self) -> Result<String, ApiError> {
        match self.session.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => {
                debug!("no session token available");
                Err(ApiError::Auth("not signed in; set ASSETDESK_TOKEN".to_string()))
            }
        }
    }
}
