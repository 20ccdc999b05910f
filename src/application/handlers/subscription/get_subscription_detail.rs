//! GetSubscriptionDetailHandler - Query handler for a single subscription.
//!
//! Returns the normalized record with its projected renewal and the
//! reminders still ahead of the reference instant.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::handlers::SubscriptionError;
use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{normalize, reminder_schedule, Reminder, SubscriptionView};
use crate::ports::{AccessToken, SubscriptionApi};

#[derive(Debug, Clone)]
pub struct GetSubscriptionDetailQuery {
    pub token: AccessToken,
    pub id: SubscriptionId,
    /// Reference instant for filtering past reminders.
    pub as_of: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDetail {
    #[serde(flatten)]
    pub view: SubscriptionView,
    pub reminders: Vec<Reminder>,
}

pub struct GetSubscriptionDetailHandler {
    api: Arc<dyn SubscriptionApi>,
}

impl GetSubscriptionDetailHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        query: GetSubscriptionDetailQuery,
    ) -> Result<SubscriptionDetail, SubscriptionError> {
        let raw = self.api.get(&query.token, &query.id).await?;
        let subscription = normalize(&raw);
        let reminders = reminder_schedule(&subscription, query.as_of);

        Ok(SubscriptionDetail {
            view: SubscriptionView::project(subscription),
            reminders,
        })
    }
}
