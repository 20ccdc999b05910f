//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, calendar helpers and error types
//! that form the vocabulary of the subscription domain.

pub mod dates;
mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{SubscriptionId, UserId};
