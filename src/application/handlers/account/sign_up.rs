//! SignUpHandler - Command handler registering a new account.

use std::sync::Arc;

use crate::application::handlers::AuthError;
use crate::domain::auth::SignUpForm;
use crate::ports::{AuthApi, AuthSession};

#[derive(Debug)]
pub struct SignUpCommand {
    pub form: SignUpForm,
}

pub struct SignUpHandler {
    auth: Arc<dyn AuthApi>,
}

impl SignUpHandler {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<AuthSession, AuthError> {
        let registration = cmd.form.validate()?;
        let session = self
            .auth
            .sign_up(&registration)
            .await
            .map_err(AuthError::from_sign_up)?;

        tracing::info!(
            user_id = ?session.account.as_ref().map(|a| a.id.as_str()),
            "Account created"
        );
        Ok(session)
    }
}
