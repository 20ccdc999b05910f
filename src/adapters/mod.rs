//! Adapters - Implementations of port interfaces.
//!
//! - `api` - upstream subscription API clients (reqwest, in-memory)
//! - `http` - axum JSON API served to the rendering layer

pub mod api;
pub mod http;

pub use api::{HttpSubscriptionApi, HttpSubscriptionApiConfig, InMemorySubscriptionApi};
pub use self::http::{app_router, AppState};
