use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::domain::account::Account;
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{RawSubscriptionRecord, SubscriptionPayload};

/// Bearer token forwarded to the upstream API on behalf of the user.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wraps a token, returning `None` if it is blank.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self(SecretString::new(token.trim().to_string())))
    }

    /// Exposes the raw token for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Port to the upstream subscription REST API.
///
/// Implementations return records verbatim; normalization is the caller's
/// job. No retries happen behind this trait.
#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    /// `GET /api/v1/user/me`
    async fn current_account(&self, token: &AccessToken) -> Result<Account, ApiError>;

    /// `GET /api/v1/subscription/user/:id`
    async fn list_for_user(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<Vec<RawSubscriptionRecord>, ApiError>;

    /// `GET /api/v1/subscription/:id`
    async fn get(
        &self,
        token: &AccessToken,
        id: &SubscriptionId,
    ) -> Result<RawSubscriptionRecord, ApiError>;

    /// `POST /api/v1/subscription`
    async fn create(
        &self,
        token: &AccessToken,
        payload: &SubscriptionPayload,
    ) -> Result<RawSubscriptionRecord, ApiError>;

    /// `PUT /api/v1/subscription/:id`
    async fn update(
        &self,
        token: &AccessToken,
        id: &SubscriptionId,
        payload: &SubscriptionPayload,
    ) -> Result<RawSubscriptionRecord, ApiError>;

    /// `DELETE /api/v1/subscription/:id`
    async fn delete(&self, token: &AccessToken, id: &SubscriptionId) -> Result<(), ApiError>;
}

/// Errors surfaced by the upstream API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    /// A sign-in or sign-up succeeded without returning a token.
    #[error("Authentication token missing")]
    MissingToken,
}

impl ApiError {
    /// Classifies a non-success HTTP status with its extracted message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            _ => ApiError::Status { status, message },
        }
    }
}
