//! HTTP routes for the dashboard.

use axum::routing::get;
use axum::Router;

use super::handlers::get_dashboard;
use crate::adapters::http::state::AppState;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(get_dashboard))
}
