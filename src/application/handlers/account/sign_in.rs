//! SignInHandler - Command handler exchanging credentials for a token.

use std::sync::Arc;

use crate::application::handlers::AuthError;
use crate::domain::auth::SignInForm;
use crate::ports::{AuthApi, AuthSession};

#[derive(Debug)]
pub struct SignInCommand {
    pub form: SignInForm,
}

pub struct SignInHandler {
    auth: Arc<dyn AuthApi>,
}

impl SignInHandler {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self, cmd: SignInCommand) -> Result<AuthSession, AuthError> {
        let credentials = cmd.form.validate()?;
        let session = self
            .auth
            .sign_in(&credentials)
            .await
            .map_err(AuthError::from_sign_in)?;

        tracing::info!(
            user_id = ?session.account.as_ref().map(|a| a.id.as_str()),
            "User signed in"
        );
        Ok(session)
    }
}
