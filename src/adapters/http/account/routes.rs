//! HTTP routes for account endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_profile, logout, sign_in, sign_up};
use crate::adapters::http::state::AppState;

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/auth/sign-in", post(sign_in))
        .route("/api/auth/sign-up", post(sign_up))
        .route("/api/auth/logout", post(logout))
}
