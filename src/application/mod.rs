//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates the upstream API port and the pure domain functions. Query
//! handlers read and derive; command handlers validate and forward.

pub mod handlers;

pub use handlers::{AuthError, SubscriptionError};
