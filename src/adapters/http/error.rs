//! Error responses for the HTTP adapter.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::application::handlers::{AuthError, SubscriptionError};
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Handler error that renders as JSON with the matching status code.
#[derive(Debug)]
pub enum HttpError {
    BadRequest(ErrorResponse),
    Unauthorized(ErrorResponse),
    NotFound(ErrorResponse),
    Conflict(ErrorResponse),
    BadGateway(ErrorResponse),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn unauthenticated() -> Self {
        HttpError::Unauthorized(ErrorResponse::new(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            HttpError::BadRequest(body)
            | HttpError::Unauthorized(body)
            | HttpError::NotFound(body)
            | HttpError::Conflict(body)
            | HttpError::BadGateway(body) => body,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        HttpError::BadRequest(
            ErrorResponse::new(err.code(), err.to_string()).with_details(json!({ "field": field })),
        )
    }
}

impl From<SubscriptionError> for HttpError {
    fn from(err: SubscriptionError) -> Self {
        let code = err.code();
        match err {
            SubscriptionError::Validation(e) => e.into(),
            SubscriptionError::Unauthorized(msg) => {
                HttpError::Unauthorized(ErrorResponse::new(code, msg))
            }
            SubscriptionError::NotFound(msg) => HttpError::NotFound(ErrorResponse::new(code, msg)),
            SubscriptionError::Upstream(e) => {
                tracing::warn!(error = %e, "Upstream API call failed");
                HttpError::BadGateway(ErrorResponse::new(code, e.to_string()))
            }
        }
    }
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        let code = err.code();
        match err {
            AuthError::Validation(e) => e.into(),
            AuthError::InvalidCredentials(msg) => {
                HttpError::Unauthorized(ErrorResponse::new(code, msg))
            }
            AuthError::EmailAlreadyExists => HttpError::Conflict(
                ErrorResponse::new(code, err.to_string()).with_details(json!({ "field": "email" })),
            ),
            AuthError::Upstream(e) => {
                tracing::warn!(error = %e, "Upstream auth call failed");
                HttpError::BadGateway(ErrorResponse::new(code, e.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::BadRequest(ErrorResponse::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    }
}
