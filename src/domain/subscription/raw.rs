//! Untrusted subscription shape as returned by the upstream API.
//!
//! Every field is kept as an optional JSON value so that a record with a
//! wrongly typed field still deserializes; interpretation happens in the
//! normalizer, where each field has a documented fallback.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Subscription record exactly as the upstream API returned it.
///
/// The upstream is known to emit both `_id` and `id`, and to misspell
/// `renewalDate` as `renewaltDate`; both spellings are captured here and
/// reconciled by [`normalize`](super::normalize).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSubscriptionRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub store_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<Value>,
    #[serde(rename = "renewaltDate", skip_serializing_if = "Option::is_none")]
    pub misspelled_renewal_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
}

impl RawSubscriptionRecord {
    /// Interprets an arbitrary JSON value as a raw record.
    ///
    /// Non-object values yield an empty record rather than an error.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Reads a field as trimmed, non-blank text.
///
/// Numbers are rendered as text so numeric ids survive; booleans, arrays
/// and objects are treated as absent.
pub(crate) fn text(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a field as a finite number, accepting numeric strings.
pub(crate) fn number(value: &Option<Value>) -> Option<f64> {
    let parsed = match value.as_ref()? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}
