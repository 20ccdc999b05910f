//! Errors returned by the application handlers.

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum SubscriptionError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication required: {0}")]
    Unauthorized(String),

    #[error("Upstream API error: {0}")]
    Upstream(ApiError),
}

impl SubscriptionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::Validation(e) => e.code(),
            SubscriptionError::NotFound(_) => ErrorCode::SubscriptionNotFound,
            SubscriptionError::Unauthorized(_) => ErrorCode::Unauthorized,
            SubscriptionError::Upstream(ApiError::Transport(_)) => ErrorCode::UpstreamUnavailable,
            SubscriptionError::Upstream(_) => ErrorCode::UpstreamError,
        }
    }
}

impl From<ApiError> for SubscriptionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized(msg) => SubscriptionError::Unauthorized(msg),
            ApiError::NotFound(msg) => SubscriptionError::NotFound(msg),
            other => SubscriptionError::Upstream(other),
        }
    }
}

/// Errors from the sign-in and sign-up flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Upstream API error: {0}")]
    Upstream(ApiError),
}

impl AuthError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::Validation(e) => e.code(),
            AuthError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            AuthError::EmailAlreadyExists => ErrorCode::EmailAlreadyExists,
            AuthError::Upstream(ApiError::Transport(_)) => ErrorCode::UpstreamUnavailable,
            AuthError::Upstream(_) => ErrorCode::UpstreamError,
        }
    }

    /// Classifies a failed sign-in. A 401 or 404 means the credentials did
    /// not match an account.
    pub fn from_sign_in(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                AuthError::InvalidCredentials(msg)
            }
            other => AuthError::Upstream(other),
        }
    }

    /// Classifies a failed sign-up. A 409, or any rejection whose message
    /// says the account already exists, means the email is taken.
    pub fn from_sign_up(err: ApiError) -> Self {
        let message = match &err {
            ApiError::Conflict(_) => return AuthError::EmailAlreadyExists,
            ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => msg.as_str(),
            ApiError::Status { message, .. } => message.as_str(),
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::MissingToken => {
                return AuthError::Upstream(err)
            }
        };
        if message.to_lowercase().contains("already exists") {
            AuthError::EmailAlreadyExists
        } else {
            AuthError::Upstream(err)
        }
    }
}
