//! HTTP DTOs for account endpoints.

pub use crate::domain::account::Account;
pub use crate::domain::auth::{SignInForm, SignUpForm};

use serde::Serialize;

use crate::ports::AuthSession;

/// Body of a successful sign-in or sign-up.
///
/// The token is also set as the `token` cookie; it is repeated here for
/// clients that send it as a bearer header instead.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: Option<Account>,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token.expose().to_string(),
            user: session.account,
        }
    }
}
