//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, calendar helpers, errors)
//! - `subscription` - Raw/normalized records, renewal projection, form validation
//! - `dashboard` - Collection-level statistics
//! - `account` - The signed-in upstream account
//! - `auth` - Sign-in and sign-up forms
//!
//! Everything here is synchronous and free of I/O.

pub mod account;
pub mod auth;
pub mod dashboard;
pub mod foundation;
pub mod subscription;
