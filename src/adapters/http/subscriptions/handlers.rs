//! HTTP handlers for subscription endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use chrono::Utc;

use super::dto::{DeletedResponse, SubscriptionDetail, SubscriptionForm, SubscriptionView};
use crate::adapters::http::error::HttpError;
use crate::adapters::http::middleware::RequireToken;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateSubscriptionCommand, DeleteSubscriptionCommand, GetSubscriptionDetailQuery,
    ListSubscriptionsQuery, UpdateSubscriptionCommand,
};
use crate::domain::foundation::{SubscriptionId, ValidationError};

/// Parses a path id. The id must stay a single upstream path segment, so
/// `/` (which may arrive percent-encoded) and dot segments are refused.
fn parse_id(raw: &str) -> Result<SubscriptionId, HttpError> {
    let id = SubscriptionId::new(raw)?;
    if id.as_str().contains('/') || matches!(id.as_str(), "." | "..") {
        return Err(ValidationError::invalid_format("id", "must be a single path segment").into());
    }
    Ok(id)
}

/// GET /api/subscriptions
pub async fn list_subscriptions(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
) -> Result<Json<Vec<SubscriptionView>>, HttpError> {
    let views = state
        .list_handler()
        .handle(ListSubscriptionsQuery { token })
        .await?;
    Ok(Json(views))
}

/// GET /api/subscriptions/:id
///
/// Includes the reminder schedule still ahead of now.
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireToken(token): RequireToken,
) -> Result<Json<SubscriptionDetail>, HttpError> {
    let query = GetSubscriptionDetailQuery {
        token,
        id: parse_id(&id)?,
        as_of: Utc::now(),
    };

    let detail = state.detail_handler().handle(query).await?;
    Ok(Json(detail))
}

/// POST /api/subscriptions
pub async fn create_subscription(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    body: Result<Json<SubscriptionForm>, JsonRejection>,
) -> Result<(StatusCode, Json<SubscriptionView>), HttpError> {
    let Json(form) = body?;

    let view = state
        .create_handler()
        .handle(CreateSubscriptionCommand { token, form })
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// PUT /api/subscriptions/:id
pub async fn update_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireToken(token): RequireToken,
    body: Result<Json<SubscriptionForm>, JsonRejection>,
) -> Result<Json<SubscriptionView>, HttpError> {
    let id = parse_id(&id)?;
    let Json(form) = body?;

    let view = state
        .update_handler()
        .handle(UpdateSubscriptionCommand { token, id, form })
        .await?;
    Ok(Json(view))
}

/// DELETE /api/subscriptions/:id
pub async fn delete_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RequireToken(token): RequireToken,
) -> Result<Json<DeletedResponse>, HttpError> {
    let id = parse_id(&id)?;

    state
        .delete_handler()
        .handle(DeleteSubscriptionCommand {
            token,
            id: id.clone(),
        })
        .await?;

    Ok(Json(DeletedResponse {
        id: id.to_string(),
        deleted: true,
    }))
}
