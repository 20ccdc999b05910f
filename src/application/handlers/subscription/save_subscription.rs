//! Create and update command handlers.
//!
//! Both validate the submitted form before anything is sent upstream and
//! normalize the record the API echoes back.

use std::sync::Arc;

use crate::application::handlers::SubscriptionError;
use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{normalize, SubscriptionForm, SubscriptionView};
use crate::ports::{AccessToken, SubscriptionApi};

#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub token: AccessToken,
    pub form: SubscriptionForm,
}

#[derive(Debug, Clone)]
pub struct UpdateSubscriptionCommand {
    pub token: AccessToken,
    pub id: SubscriptionId,
    pub form: SubscriptionForm,
}

pub struct CreateSubscriptionHandler {
    api: Arc<dyn SubscriptionApi>,
}

impl CreateSubscriptionHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<SubscriptionView, SubscriptionError> {
        let payload = cmd.form.validate()?;
        let raw = self.api.create(&cmd.token, &payload).await?;
        let subscription = normalize(&raw);

        tracing::info!(subscription_id = ?subscription.id_str(), "Subscription created");
        Ok(SubscriptionView::project(subscription))
    }
}

pub struct UpdateSubscriptionHandler {
    api: Arc<dyn SubscriptionApi>,
}

impl UpdateSubscriptionHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubscriptionCommand,
    ) -> Result<SubscriptionView, SubscriptionError> {
        let payload = cmd.form.validate()?;
        let raw = self.api.update(&cmd.token, &cmd.id, &payload).await?;
        let subscription = normalize(&raw);

        tracing::info!(subscription_id = %cmd.id, "Subscription updated");
        Ok(SubscriptionView::project(subscription))
    }
}
