//! Subscription HTTP adapter module.
//!
//! CRUD endpoints over the upstream API, answering with normalized views.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::subscription_routes;
