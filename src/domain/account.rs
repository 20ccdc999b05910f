//! The signed-in account, as reported by `GET /api/v1/user/me`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::UserId;
use crate::domain::subscription::raw_text;

/// Account record as returned upstream; shares the `_id`/`id` ambiguity
/// of subscription records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAccountRecord {
    #[serde(rename = "_id")]
    pub store_id: Option<Value>,
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub created_at: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<String>,
}

impl Account {
    /// Builds an account from the raw record, preferring `_id` over `id`.
    ///
    /// Returns `None` when neither identifier is usable, since subscriptions
    /// cannot be listed without one.
    pub fn from_raw(raw: &RawAccountRecord) -> Option<Self> {
        let id = raw_text(&raw.store_id).or_else(|| raw_text(&raw.id))?;
        Some(Self {
            id: UserId::new(id).ok()?,
            name: raw_text(&raw.name),
            email: raw_text(&raw.email),
            created_at: raw_text(&raw.created_at),
        })
    }
}
