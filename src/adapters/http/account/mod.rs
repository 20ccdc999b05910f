//! Account HTTP adapter module: profile, sign-in, sign-up and logout.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::account_routes;
