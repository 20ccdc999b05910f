//! Dashboard aggregation.
//!
//! Derives collection-level statistics from normalized subscriptions. The
//! reference instant is always passed in, never sampled here, so a whole
//! aggregation sees one consistent "now".

mod stats;

pub use stats::{
    aggregate, CategoryBucket, DashboardStats, UpcomingRenewal, UNCATEGORIZED,
    UPCOMING_WINDOW_DAYS,
};
