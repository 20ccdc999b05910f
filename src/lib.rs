//! Subtrack - subscription tracking web client backend
//!
//! Fetches raw subscription records from the upstream REST API on behalf of
//! a signed-in user, normalizes their inconsistent shapes, projects renewal
//! dates and serves dashboard and list view models as JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
