//! Subscription module - normalization and renewal projection.
//!
//! Upstream records arrive as [`RawSubscriptionRecord`]s with inconsistent
//! field names and types. Every view goes through [`normalize`] and
//! [`project_renewal_date`] instead of re-deriving fallbacks locally.

mod form;
mod frequency;
mod normalized;
mod raw;
mod renewal;
mod status;
mod view;

pub use form::{SubscriptionForm, SubscriptionPayload, SUPPORTED_CATEGORIES, SUPPORTED_CURRENCIES};
pub use frequency::BillingFrequency;
pub use normalized::{normalize, normalize_all, NormalizedSubscription};
pub use raw::RawSubscriptionRecord;
pub use renewal::{project_renewal_date, reminder_schedule, Reminder, REMINDER_OFFSETS_DAYS};
pub use status::SubscriptionStatus;
pub use view::SubscriptionView;

pub(crate) use raw::text as raw_text;
