//! HTTP DTOs for subscription endpoints.
//!
//! The form and view models already carry their wire shape, so they are
//! re-exported rather than mirrored.

pub use crate::application::handlers::SubscriptionDetail;
pub use crate::domain::subscription::{SubscriptionForm, SubscriptionView};

use serde::Serialize;

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub id: String,
    pub deleted: bool,
}
