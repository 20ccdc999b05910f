//! Add/edit subscription form and the payload sent upstream.
//!
//! Unlike the normalizer, which tolerates anything the upstream returns,
//! user input is validated strictly before it leaves the client.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::BillingFrequency;
use crate::domain::foundation::dates::parse_date;
use crate::domain::foundation::ValidationError;

/// Currencies offered by the subscription form.
pub const SUPPORTED_CURRENCIES: [&str; 2] = ["Rs", "USD"];

/// Categories offered by the subscription form.
pub const SUPPORTED_CATEGORIES: [&str; 8] = [
    "sports",
    "news",
    "lifestyle",
    "technology",
    "finance",
    "politics",
    "entertainment",
    "other",
];

/// Form fields as submitted, all as text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionForm {
    pub name: String,
    pub price: String,
    pub currency: String,
    pub frequency: String,
    pub category: String,
    pub payment_method: String,
    pub start_date: String,
}

/// Validated body for `POST`/`PUT /api/v1/subscription`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPayload {
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub frequency: BillingFrequency,
    pub category: String,
    pub payment_method: String,
    /// RFC 3339 with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
    pub start_date: String,
}

impl SubscriptionForm {
    /// Validates the form, returning the first failing field.
    pub fn validate(&self) -> Result<SubscriptionPayload, ValidationError> {
        let name = required("name", &self.name)?;

        let price_text = required("price", &self.price)?;
        let price: f64 = price_text
            .parse()
            .map_err(|_| ValidationError::invalid_format("price", "must be a number"))?;
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::invalid_format(
                "price",
                "must be zero or a positive amount",
            ));
        }

        let currency = required("currency", &self.currency)?;
        if !SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
            return Err(ValidationError::unsupported_value(
                "currency",
                currency,
                &SUPPORTED_CURRENCIES,
            ));
        }

        let frequency_text = required("frequency", &self.frequency)?;
        let frequency = BillingFrequency::parse(&frequency_text).ok_or_else(|| {
            ValidationError::unsupported_value(
                "frequency",
                &frequency_text,
                &BillingFrequency::ALL.map(|f| f.as_str()),
            )
        })?;

        let category = required("category", &self.category)?.to_ascii_lowercase();
        if !SUPPORTED_CATEGORIES.contains(&category.as_str()) {
            return Err(ValidationError::unsupported_value(
                "category",
                category,
                &SUPPORTED_CATEGORIES,
            ));
        }

        let payment_method = required("paymentMethod", &self.payment_method)?;

        let start_text = required("startDate", &self.start_date)?;
        let start_date = parse_date(&start_text)
            .ok_or_else(|| ValidationError::invalid_format("startDate", "must be a valid date"))?
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        Ok(SubscriptionPayload {
            name,
            price,
            currency,
            frequency,
            category,
            payment_method,
            start_date,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}
