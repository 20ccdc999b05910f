//! DeleteSubscriptionHandler - Command handler for removing a subscription.

use std::sync::Arc;

use crate::application::handlers::SubscriptionError;
use crate::domain::foundation::SubscriptionId;
use crate::ports::{AccessToken, SubscriptionApi};

#[derive(Debug, Clone)]
pub struct DeleteSubscriptionCommand {
    pub token: AccessToken,
    pub id: SubscriptionId,
}

pub struct DeleteSubscriptionHandler {
    api: Arc<dyn SubscriptionApi>,
}

impl DeleteSubscriptionHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: DeleteSubscriptionCommand) -> Result<(), SubscriptionError> {
        self.api.delete(&cmd.token, &cmd.id).await?;
        tracing::info!(subscription_id = %cmd.id, "Subscription deleted");
        Ok(())
    }
}
