//! Display configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::subscription::SUPPORTED_CURRENCIES;

/// Settings that only affect how values are presented.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency shown on the dashboard when no subscription carries one
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !SUPPORTED_CURRENCIES.contains(&self.default_currency.as_str()) {
            return Err(ValidationError::UnsupportedCurrency(
                self.default_currency.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "Rs".to_string()
}
