//! Upstream API adapters.
//!
//! - `HttpSubscriptionApi` - reqwest client for the real REST API
//! - `InMemorySubscriptionApi` - seedable in-memory double

pub mod envelope;
mod http_client;
mod in_memory;

pub use http_client::{HttpSubscriptionApi, HttpSubscriptionApiConfig};
pub use in_memory::InMemorySubscriptionApi;
