//! HTTP handlers for the dashboard endpoint.

use axum::extract::{Json, State};
use chrono::Utc;

use crate::adapters::http::error::HttpError;
use crate::adapters::http::middleware::RequireToken;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{DashboardView, GetDashboardQuery};

/// GET /api/dashboard
///
/// Stats and per-row projections for the caller's subscriptions, computed
/// against a single instant sampled here.
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
) -> Result<Json<DashboardView>, HttpError> {
    let query = GetDashboardQuery {
        token,
        as_of: Utc::now(),
    };

    let view = state.dashboard_handler().handle(query).await?;
    Ok(Json(view))
}
