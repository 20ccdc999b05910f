//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod dashboard;
mod errors;
pub mod subscription;

pub use account::{
    GetProfileHandler, GetProfileQuery, SignInCommand, SignInHandler, SignUpCommand,
    SignUpHandler,
};
pub use dashboard::{DashboardView, GetDashboardHandler, GetDashboardQuery};
pub use errors::{AuthError, SubscriptionError};
pub use subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, DeleteSubscriptionCommand,
    DeleteSubscriptionHandler, GetSubscriptionDetailHandler, GetSubscriptionDetailQuery,
    ListSubscriptionsHandler, ListSubscriptionsQuery, SubscriptionDetail,
    UpdateSubscriptionCommand, UpdateSubscriptionHandler,
};
