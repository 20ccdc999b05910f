//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubscriptionApi` - the upstream subscription REST API
//! - `AuthApi` - the upstream sign-in and sign-up endpoints

mod auth_api;
mod subscription_api;

pub use auth_api::{AuthApi, AuthSession};
pub use subscription_api::{AccessToken, ApiError, SubscriptionApi};
