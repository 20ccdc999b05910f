//! Access-token extraction for axum.
//!
//! The upstream API authenticates every call, so this layer does not
//! validate tokens; it only finds one and forwards it. Lookup order:
//!
//! 1. `Authorization: Bearer <token>`
//! 2. the `token` cookie set by the sign-in and sign-up routes
//!
//! # Example
//!
//! ```ignore
//! async fn my_handler(RequireToken(token): RequireToken) -> impl IntoResponse {
//!     // token is forwarded to the SubscriptionApi port
//! }
//! ```

use http::header::{InvalidHeaderValue, AUTHORIZATION, COOKIE};
use http::{HeaderMap, HeaderValue};

use crate::adapters::http::error::HttpError;
use crate::ports::AccessToken;

/// Name of the cookie holding the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Lifetime of the session cookie (one day).
pub const SESSION_MAX_AGE_SECS: u64 = 86_400;

/// `Set-Cookie` value storing `token` for the rest of the session.
pub fn session_cookie(token: &AccessToken) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax; HttpOnly",
        TOKEN_COOKIE,
        token.expose(),
        SESSION_MAX_AGE_SECS
    ))
}

/// `Set-Cookie` value that expires the session cookie.
pub fn cleared_session_cookie() -> HeaderValue {
    HeaderValue::from_static("token=; Path=/; Max-Age=0; SameSite=Lax; HttpOnly")
}

/// Extractor that requires an access token; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct RequireToken(pub AccessToken);

impl<S> axum::extract::FromRequestParts<S> for RequireToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            token_from_headers(&parts.headers)
                .map(RequireToken)
                .ok_or_else(HttpError::unauthenticated)
        })
    }
}

/// Finds the access token in the headers, bearer first.
pub fn token_from_headers(headers: &HeaderMap) -> Option<AccessToken> {
    bearer_token(headers).or_else(|| cookie_token(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<AccessToken> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(AccessToken::new)
}

fn cookie_token(headers: &HeaderMap) -> Option<AccessToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .and_then(|(_, value)| AccessToken::new(value))
}
