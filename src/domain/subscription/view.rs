//! Display-ready projection of a normalized subscription.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{project_renewal_date, NormalizedSubscription};

/// A normalized subscription together with the values every view derives
/// from it: projected next renewal, monthly-equivalent cost and badge label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub subscription: NormalizedSubscription,
    pub next_renewal: Option<DateTime<Utc>>,
    pub monthly_cost: f64,
    pub status_label: &'static str,
}

impl SubscriptionView {
    pub fn project(subscription: NormalizedSubscription) -> Self {
        let next_renewal = project_renewal_date(&subscription);
        let monthly_cost = subscription.frequency.monthly_equivalent(subscription.price);
        let status_label = subscription.status.label();
        Self {
            subscription,
            next_renewal,
            monthly_cost,
            status_label,
        }
    }

    pub fn project_all(subscriptions: Vec<NormalizedSubscription>) -> Vec<Self> {
        subscriptions.into_iter().map(Self::project).collect()
    }
}
