//! HTTP adapter - the JSON API consumed by the rendering layer.
//!
//! Each feature has its own module with handlers and routes; `router`
//! assembles them with the cross-cutting layers.

pub mod account;
pub mod dashboard;
pub mod error;
pub mod middleware;
mod router;
mod state;
pub mod subscriptions;

pub use error::{ErrorResponse, HttpError};
pub use router::app_router;
pub use state::AppState;
