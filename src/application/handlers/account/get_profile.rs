//! GetProfileHandler - Query handler for the signed-in account.

use std::sync::Arc;

use crate::application::handlers::SubscriptionError;
use crate::domain::account::Account;
use crate::ports::{AccessToken, SubscriptionApi};

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub token: AccessToken,
}

pub struct GetProfileHandler {
    api: Arc<dyn SubscriptionApi>,
}

impl GetProfileHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Account, SubscriptionError> {
        Ok(self.api.current_account(&query.token).await?)
    }
}
