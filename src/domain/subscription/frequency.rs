//! Billing frequency and the period arithmetic derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Approximate number of weeks in a month used for spend conversion.
const WEEKS_PER_MONTH: f64 = 4.33;

/// Approximate number of days in a month used for spend conversion.
const DAYS_PER_MONTH: f64 = 30.0;

/// How often a subscription is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingFrequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BillingFrequency {
    pub const ALL: [BillingFrequency; 4] = [
        BillingFrequency::Daily,
        BillingFrequency::Weekly,
        BillingFrequency::Monthly,
        BillingFrequency::Yearly,
    ];

    /// Parses a raw frequency, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(BillingFrequency::Daily),
            "weekly" => Some(BillingFrequency::Weekly),
            "monthly" => Some(BillingFrequency::Monthly),
            "yearly" => Some(BillingFrequency::Yearly),
            _ => None,
        }
    }

    /// Parses a raw frequency, falling back to `Monthly`.
    pub fn parse_or_default(input: Option<&str>) -> Self {
        input.and_then(Self::parse).unwrap_or_default()
    }

    /// Length of one billing period in days.
    ///
    /// Months and years are fixed-length approximations (30 and 365 days),
    /// matching how the upstream schedules renewals.
    pub fn period_days(&self) -> i64 {
        match self {
            BillingFrequency::Daily => 1,
            BillingFrequency::Weekly => 7,
            BillingFrequency::Monthly => 30,
            BillingFrequency::Yearly => 365,
        }
    }

    /// Converts a per-period price into an approximate monthly amount.
    ///
    /// Capped at `f64::MAX` so a huge finite price stays finite.
    pub fn monthly_equivalent(&self, price: f64) -> f64 {
        let monthly = match self {
            BillingFrequency::Daily => price * DAYS_PER_MONTH,
            BillingFrequency::Weekly => price * WEEKS_PER_MONTH,
            BillingFrequency::Monthly => price,
            BillingFrequency::Yearly => price / 12.0,
        };
        monthly.min(f64::MAX)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingFrequency::Daily => "daily",
            BillingFrequency::Weekly => "weekly",
            BillingFrequency::Monthly => "monthly",
            BillingFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
