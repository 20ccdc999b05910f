//! Subscription command and query handlers.

mod delete_subscription;
mod get_subscription_detail;
mod list_subscriptions;
mod save_subscription;

pub use delete_subscription::{DeleteSubscriptionCommand, DeleteSubscriptionHandler};
pub use get_subscription_detail::{
    GetSubscriptionDetailHandler, GetSubscriptionDetailQuery, SubscriptionDetail,
};
pub(crate) use list_subscriptions::load_subscriptions;
pub use list_subscriptions::{ListSubscriptionsHandler, ListSubscriptionsQuery};
pub use save_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, UpdateSubscriptionCommand,
    UpdateSubscriptionHandler,
};
