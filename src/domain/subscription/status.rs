//! Subscription status as displayed to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status reported by the upstream API.
///
/// The upstream owns transitions between these states; the client only
/// reads and displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Currently billed. Only active subscriptions count towards spend
    /// and upcoming renewals.
    Active,

    /// Ran past its end date.
    Expired,

    /// Created but not yet confirmed upstream.
    Pending,

    /// Paused, or status unknown.
    #[default]
    Inactive,

    /// Cancelled by the user.
    Cancelled,
}

impl SubscriptionStatus {
    /// All statuses in display order.
    pub const ALL: [SubscriptionStatus; 5] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Expired,
        SubscriptionStatus::Pending,
        SubscriptionStatus::Inactive,
        SubscriptionStatus::Cancelled,
    ];

    /// Parses a raw status, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for unrecognised input; callers decide the fallback.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "active" => Some(SubscriptionStatus::Active),
            "expired" => Some(SubscriptionStatus::Expired),
            "pending" => Some(SubscriptionStatus::Pending),
            "inactive" => Some(SubscriptionStatus::Inactive),
            "cancelled" => Some(SubscriptionStatus::Cancelled),
            _ => None,
        }
    }

    /// Parses a raw status, falling back to `Inactive`.
    pub fn parse_or_default(input: Option<&str>) -> Self {
        input.and_then(Self::parse).unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }

    /// Returns the badge label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Expired => "Expired",
            SubscriptionStatus::Pending => "Pending",
            SubscriptionStatus::Inactive => "Inactive",
            SubscriptionStatus::Cancelled => "Cancelled",
        }
    }

    /// Returns the wire value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Expired => "expired",
            SubscriptionStatus::Pending => "pending",
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
