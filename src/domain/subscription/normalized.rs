//! Canonical subscription record and the mapping from the raw shape.

use serde::{Deserialize, Serialize};

use super::raw::{number, text, RawSubscriptionRecord};
use super::{BillingFrequency, SubscriptionStatus};
use crate::domain::foundation::SubscriptionId;

/// Subscription record after canonicalisation.
///
/// At most one identifier, one correctly spelled renewal date and a status
/// from the known set. Built fresh per request and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSubscription {
    /// `None` when the upstream sent no usable identifier; serialized as `null`.
    pub id: Option<SubscriptionId>,
    pub name: String,
    /// Non-negative, finite.
    pub price: f64,
    pub currency: Option<String>,
    pub frequency: BillingFrequency,
    /// Renewal date as supplied upstream, unparsed.
    pub renewal_date: Option<String>,
    pub start_date: Option<String>,
    pub status: SubscriptionStatus,
    pub category: Option<String>,
    pub payment_method: Option<String>,
    pub created_at: Option<String>,
}

/// Maps a raw upstream record onto the canonical shape.
///
/// Never fails. Tie-breaks:
/// - `_id` wins over `id` (it comes straight from the persistent store)
/// - `renewalDate` wins over the misspelled `renewaltDate`
///
/// Missing or unparseable values fall back to `None`, `0.0`, `Monthly`
/// or `Inactive`.
pub fn normalize(raw: &RawSubscriptionRecord) -> NormalizedSubscription {
    let id = text(&raw.store_id)
        .or_else(|| text(&raw.id))
        .and_then(|id| SubscriptionId::new(id).ok());
    if id.is_none() {
        tracing::warn!(name = ?text(&raw.name), "Subscription record has no identifier");
    }

    let price = number(&raw.price).filter(|p| *p >= 0.0).unwrap_or(0.0);

    NormalizedSubscription {
        id,
        name: text(&raw.name).unwrap_or_default(),
        price,
        currency: text(&raw.currency),
        frequency: BillingFrequency::parse_or_default(text(&raw.frequency).as_deref()),
        renewal_date: text(&raw.renewal_date).or_else(|| text(&raw.misspelled_renewal_date)),
        start_date: text(&raw.start_date),
        status: SubscriptionStatus::parse_or_default(text(&raw.status).as_deref()),
        category: text(&raw.category),
        payment_method: text(&raw.payment_method),
        created_at: text(&raw.created_at),
    }
}

impl NormalizedSubscription {
    /// The identifier as text, if the record has one.
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(SubscriptionId::as_str)
    }
}

/// Normalizes a batch, preserving input order.
pub fn normalize_all(raws: &[RawSubscriptionRecord]) -> Vec<NormalizedSubscription> {
    raws.iter().map(normalize).collect()
}

impl From<&RawSubscriptionRecord> for NormalizedSubscription {
    fn from(raw: &RawSubscriptionRecord) -> Self {
        normalize(raw)
    }
}

#[cfg(test)]
#[path = "normalized_test.rs"]
mod normalized_test;
