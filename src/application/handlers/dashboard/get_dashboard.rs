//! GetDashboardHandler - Query handler for the dashboard summary.
//!
//! Loads the caller's subscriptions, aggregates them against one reference
//! instant and returns both the stats and the per-row projections.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::handlers::subscription::load_subscriptions;
use crate::application::handlers::SubscriptionError;
use crate::domain::dashboard::{aggregate, DashboardStats};
use crate::domain::subscription::SubscriptionView;
use crate::ports::{AccessToken, SubscriptionApi};

/// Query to build the dashboard.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub token: AccessToken,
    /// Sampled once per request so every derived value agrees on "today".
    pub as_of: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub subscriptions: Vec<SubscriptionView>,
}

pub struct GetDashboardHandler {
    api: Arc<dyn SubscriptionApi>,
    default_currency: String,
}

impl GetDashboardHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>, default_currency: impl Into<String>) -> Self {
        Self {
            api,
            default_currency: default_currency.into(),
        }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardView, SubscriptionError> {
        let subscriptions = load_subscriptions(self.api.as_ref(), &query.token).await?;
        let stats = aggregate(&subscriptions, query.as_of, &self.default_currency);

        tracing::info!(
            total = stats.total_count,
            active = stats.active_count,
            upcoming = stats.upcoming_renewals.len(),
            "Dashboard aggregated"
        );

        Ok(DashboardView {
            stats,
            subscriptions: SubscriptionView::project_all(subscriptions),
        })
    }
}
