//! Renewal projection and reminder scheduling.
//!
//! The upstream does not reliably persist `renewalDate`, so the client
//! derives it from `startDate` and the billing period when it is missing.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::NormalizedSubscription;
use crate::domain::foundation::dates::parse_date;

/// Days before renewal at which reminders are sent, furthest first.
pub const REMINDER_OFFSETS_DAYS: [i64; 4] = [7, 5, 2, 1];

/// Projects the next renewal date of a subscription.
///
/// Rules, first match wins:
/// 1. a parseable `renewal_date` is returned as is
/// 2. a parseable `start_date` plus one billing period
/// 3. `None`
///
/// Malformed dates are treated as absent, and so is a start date whose next
/// period would fall past the last representable instant. Does not read the
/// clock.
pub fn project_renewal_date(sub: &NormalizedSubscription) -> Option<DateTime<Utc>> {
    if let Some(renewal) = sub.renewal_date.as_deref().and_then(parse_date) {
        return Some(renewal);
    }

    sub.start_date
        .as_deref()
        .and_then(parse_date)
        .and_then(|start| start.checked_add_signed(Duration::days(sub.frequency.period_days())))
}

/// A reminder the upstream will send ahead of a renewal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub days_before: i64,
    pub remind_at: DateTime<Utc>,
}

/// Lists the reminders still ahead of `now` for a subscription's next renewal.
///
/// Empty when no renewal date can be projected. Offsets that would land
/// before the first representable instant are skipped.
pub fn reminder_schedule(sub: &NormalizedSubscription, now: DateTime<Utc>) -> Vec<Reminder> {
    let Some(renewal) = project_renewal_date(sub) else {
        return Vec::new();
    };

    REMINDER_OFFSETS_DAYS
        .iter()
        .filter_map(|&days_before| {
            renewal
                .checked_sub_signed(Duration::days(days_before))
                .map(|remind_at| Reminder {
                    days_before,
                    remind_at,
                })
        })
        .filter(|reminder| reminder.remind_at > now)
        .collect()
}
