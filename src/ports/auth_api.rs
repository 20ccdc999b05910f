use async_trait::async_trait;

use super::{AccessToken, ApiError};
use crate::domain::account::Account;
use crate::domain::auth::{Credentials, Registration};

/// Token issued by the upstream at sign-in or sign-up.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: AccessToken,
    /// The `user` object returned next to the token, when it carries an id.
    pub account: Option<Account>,
}

/// Port to the upstream authentication endpoints.
///
/// Both calls are unauthenticated. A success response without a token is
/// [`ApiError::MissingToken`].
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /api/v1/auth/sign-in`
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, ApiError>;

    /// `POST /api/v1/auth/sign-up`
    async fn sign_up(&self, registration: &Registration) -> Result<AuthSession, ApiError>;
}
