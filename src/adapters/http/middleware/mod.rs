//! HTTP middleware for axum.
//!
//! - `auth` - access-token extractor (bearer header or `token` cookie) and
//!   the session cookie values

pub mod auth;

pub use auth::{
    cleared_session_cookie, session_cookie, token_from_headers, RequireToken,
    SESSION_MAX_AGE_SECS, TOKEN_COOKIE,
};
