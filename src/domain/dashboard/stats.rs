use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::foundation::dates::{days_between, end_of_day, start_of_day};
use crate::domain::subscription::{project_renewal_date, NormalizedSubscription};

/// Number of days after today covered by the upcoming-renewals list.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Bucket label for subscriptions without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Dashboard-level statistics over a user's subscriptions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Reference instant the window was computed against
    pub as_of: DateTime<Utc>,
    pub total_count: usize,
    pub active_count: usize,
    /// Active subscriptions renewing between today and the end of the
    /// seventh day from today, soonest first
    pub upcoming_renewals: Vec<UpcomingRenewal>,
    /// Monthly-equivalent spend over active subscriptions. Amounts are
    /// summed as-is; no currency conversion happens. Saturates at `f64::MAX`
    /// so the value always serializes as a number.
    pub total_monthly_cost: f64,
    pub currency: String,
    /// Buckets in order of first appearance
    pub by_category: Vec<CategoryBucket>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingRenewal {
    pub subscription: NormalizedSubscription,
    pub renewal_date: DateTime<Utc>,
    /// Whole calendar days from today; 0 means renewing today
    pub days_until: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBucket {
    pub label: String,
    pub subscriptions: Vec<NormalizedSubscription>,
    pub active_count: usize,
}

/// Aggregates dashboard statistics as of `now`.
///
/// Single pass over `subs`; the input is only borrowed. Records whose
/// renewal cannot be projected are left out of `upcoming_renewals` but still
/// counted and bucketed. `currency` is taken from the first record, or
/// `default_currency` when there is none.
pub fn aggregate(
    subs: &[NormalizedSubscription],
    now: DateTime<Utc>,
    default_currency: &str,
) -> DashboardStats {
    let window_start = start_of_day(now);
    let window_end = now
        .checked_add_signed(Duration::days(UPCOMING_WINDOW_DAYS))
        .map(end_of_day)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let mut active_count = 0;
    let mut total_monthly_cost = 0.0;
    let mut upcoming_renewals = Vec::new();
    let mut by_category: Vec<CategoryBucket> = Vec::new();
    let mut bucket_index: HashMap<String, usize> = HashMap::new();

    for sub in subs {
        let is_active = sub.status.is_active();

        if is_active {
            active_count += 1;
            total_monthly_cost =
                (total_monthly_cost + sub.frequency.monthly_equivalent(sub.price)).min(f64::MAX);

            if let Some(renewal_date) = project_renewal_date(sub) {
                if renewal_date >= window_start && renewal_date <= window_end {
                    upcoming_renewals.push(UpcomingRenewal {
                        subscription: sub.clone(),
                        renewal_date,
                        days_until: days_between(now, renewal_date),
                    });
                }
            }
        }

        let label = category_label(sub);
        let index = *bucket_index.entry(label.to_string()).or_insert_with(|| {
            by_category.push(CategoryBucket {
                label: label.to_string(),
                subscriptions: Vec::new(),
                active_count: 0,
            });
            by_category.len() - 1
        });
        let bucket = &mut by_category[index];
        bucket.subscriptions.push(sub.clone());
        if is_active {
            bucket.active_count += 1;
        }
    }

    // Stable: equal dates keep input order.
    upcoming_renewals.sort_by_key(|upcoming| upcoming.renewal_date);

    let currency = subs
        .first()
        .and_then(|sub| sub.currency.clone())
        .unwrap_or_else(|| default_currency.to_string());

    DashboardStats {
        as_of: now,
        total_count: subs.len(),
        active_count,
        upcoming_renewals,
        total_monthly_cost,
        currency,
        by_category,
    }
}

fn category_label(sub: &NormalizedSubscription) -> &str {
    sub.category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(UNCATEGORIZED)
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
