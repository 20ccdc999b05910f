//! HTTP routes for subscription endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_subscription, delete_subscription, get_subscription, list_subscriptions,
    update_subscription,
};
use crate::adapters::http::state::AppState;

pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/subscriptions",
            get(list_subscriptions).post(create_subscription),
        )
        .route(
            "/api/subscriptions/:id",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
}
