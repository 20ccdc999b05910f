//! HTTP handlers for account endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::{Account, SessionResponse, SignInForm, SignUpForm};
use crate::adapters::http::error::{ErrorResponse, HttpError};
use crate::adapters::http::middleware::{cleared_session_cookie, session_cookie, RequireToken};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetProfileQuery, SignInCommand, SignUpCommand};
use crate::domain::foundation::ErrorCode;
use crate::ports::AuthSession;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
) -> Result<Json<Account>, HttpError> {
    let account = state
        .profile_handler()
        .handle(GetProfileQuery { token })
        .await?;
    Ok(Json(account))
}

/// POST /api/auth/sign-in
///
/// Sets the `token` cookie on success.
pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInForm>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(form) = body?;
    let session = state.sign_in_handler().handle(SignInCommand { form }).await?;
    session_response(StatusCode::OK, session)
}

/// POST /api/auth/sign-up
///
/// Creates the account and signs it in, like sign-in.
pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Json<SignUpForm>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(form) = body?;
    let session = state.sign_up_handler().handle(SignUpCommand { form }).await?;
    session_response(StatusCode::CREATED, session)
}

/// POST /api/auth/logout
///
/// The upstream has no logout endpoint; expiring the cookie is all there is.
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, cleared_session_cookie())],
    )
}

fn session_response(status: StatusCode, session: AuthSession) -> Result<Response, HttpError> {
    let cookie = session_cookie(&session.token).map_err(|_| {
        HttpError::BadGateway(ErrorResponse::new(
            ErrorCode::UpstreamError,
            "Upstream returned a token that cannot be stored in a cookie",
        ))
    })?;
    Ok((
        status,
        [(SET_COOKIE, cookie)],
        Json(SessionResponse::from(session)),
    )
        .into_response())
}
