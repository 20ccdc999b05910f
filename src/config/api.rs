//! Upstream subscription API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the subscription REST API lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL, without the `/api/v1` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate API configuration
    ///
    /// HTTPS is only enforced when `require_https` is set (production).
    pub fn validate(&self, require_https: bool) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        let is_https = url.starts_with("https://");
        if !is_https && !url.starts_with("http://") {
            return Err(ValidationError::InvalidApiBaseUrl(self.base_url.clone()));
        }
        if require_https && !is_https {
            return Err(ValidationError::ApiBaseUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5500".to_string()
}

fn default_timeout() -> u64 {
    30
}
