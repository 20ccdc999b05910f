//! Response envelope handling for the upstream API.
//!
//! Successful bodies usually look like `{ "success": true, "data": ... }`,
//! but some endpoints return the payload bare. Error bodies carry either
//! `error` (error middleware) or `message` (auth controller), sometimes as
//! an array of validation messages.

use serde_json::Value;

use crate::domain::account::{Account, RawAccountRecord};
use crate::domain::subscription::RawSubscriptionRecord;
use crate::ports::{AccessToken, ApiError, AuthSession};

const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

/// Extracts the subscription list from a list response.
///
/// `data` may hold an array or a single record; a missing or null `data`
/// yields an empty list.
pub fn records_from_body(body: Value) -> Vec<RawSubscriptionRecord> {
    let payload = match body {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        other => other,
    };

    match payload {
        Value::Array(items) => items
            .into_iter()
            .map(RawSubscriptionRecord::from_value)
            .collect(),
        record @ Value::Object(_) => vec![RawSubscriptionRecord::from_value(record)],
        _ => Vec::new(),
    }
}

/// Extracts a single record, accepting both enveloped and bare bodies.
pub fn record_from_body(body: Value) -> Result<RawSubscriptionRecord, ApiError> {
    match unwrap_single(body) {
        record @ Value::Object(_) => Ok(RawSubscriptionRecord::from_value(record)),
        other => Err(ApiError::Decode(format!(
            "expected a subscription object, got {}",
            kind(&other)
        ))),
    }
}

/// Extracts the signed-in account, accepting both enveloped and bare bodies.
pub fn account_from_body(body: Value) -> Result<Account, ApiError> {
    let raw: RawAccountRecord = serde_json::from_value(unwrap_single(body))
        .map_err(|e| ApiError::Decode(format!("invalid account body: {}", e)))?;
    Account::from_raw(&raw)
        .ok_or_else(|| ApiError::Decode("account has no identifier".to_string()))
}

/// Extracts `{ token, user }` from a sign-in or sign-up response.
///
/// The token is required. A `user` without a usable id is dropped rather
/// than failing the sign-in.
pub fn session_from_body(body: Value) -> Result<AuthSession, ApiError> {
    let data = unwrap_single(body);
    let token = data
        .get("token")
        .and_then(Value::as_str)
        .and_then(AccessToken::new)
        .ok_or(ApiError::MissingToken)?;
    let account = data
        .get("user")
        .cloned()
        .and_then(|user| serde_json::from_value::<RawAccountRecord>(user).ok())
        .and_then(|raw| Account::from_raw(&raw));
    Ok(AuthSession { token, account })
}

/// Builds a human readable message for a failed response.
///
/// JSON bodies use `error`, then `message`; arrays are joined with ", ".
/// Other bodies use their text. Falls back to the status reason, then to
/// a generic message.
pub fn error_message(status: u16, reason: Option<&str>, is_json: bool, body: &str) -> String {
    let fallback = || {
        reason
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    };

    if !is_json {
        let text = body.trim();
        return if text.is_empty() {
            fallback()
        } else {
            text.to_string()
        };
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => message_field(&value, "error")
            .or_else(|| message_field(&value, "message"))
            .unwrap_or_else(fallback),
        Err(_) => reason
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {} Error", status)),
    }
}

fn message_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

fn unwrap_single(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
