//! reqwest implementation of the `SubscriptionApi` port.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpSubscriptionApiConfig::new("http://localhost:5500")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let api = HttpSubscriptionApi::new(config)?;
//! ```
//!
//! Paths are built segment by segment on a parsed [`Url`], so ids taken from
//! client requests can never change which upstream route is called.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::{json, Value};

use super::envelope::{
    account_from_body, error_message, record_from_body, records_from_body, session_from_body,
};
use crate::domain::account::Account;
use crate::domain::auth::{Credentials, Registration};
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{RawSubscriptionRecord, SubscriptionPayload};
use crate::ports::{AccessToken, ApiError, AuthApi, AuthSession, SubscriptionApi};

const SUBSCRIPTION: [&str; 3] = ["api", "v1", "subscription"];

/// Connection settings for the upstream API.
#[derive(Debug, Clone)]
pub struct HttpSubscriptionApiConfig {
    /// Base URL without trailing slash (default: http://localhost:5500).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpSubscriptionApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin fetch wrapper over the upstream REST API.
///
/// Attaches the user's bearer token, unwraps response envelopes and turns
/// non-2xx responses into [`ApiError`]s. Never retries.
pub struct HttpSubscriptionApi {
    config: HttpSubscriptionApiConfig,
    client: Client,
}

impl HttpSubscriptionApi {
    pub fn new(config: HttpSubscriptionApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Appends `segments` to the base URL, each percent-encoded as exactly
    /// one path segment.
    ///
    /// `.` and `..` are refused because URL normalization would resolve
    /// them against the parent path.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(ApiError::NotFound(format!("invalid path segment '{}'", segment)));
        }

        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::Transport(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and returns the decoded JSON body.
    ///
    /// Empty success bodies decode to `Value::Null`.
    async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&AccessToken>,
        body: Option<&B>,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(segments)?;
        let path = url.path().to_string();

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, path = %path, "Calling upstream API");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path = %path, error = %e, "Upstream API unreachable");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let is_json = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|ct| ct.contains("application/json"))
                .unwrap_or(false);
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status.as_u16(), status.canonical_reason(), is_json, &body);

            tracing::warn!(
                %method,
                path = %path,
                status = status.as_u16(),
                message = %message,
                "Upstream API request failed"
            );
            return Err(ApiError::from_status(status.as_u16(), message));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%method, path = %path, error = %e, "Upstream API returned invalid JSON");
            ApiError::Decode(e.to_string())
        })
    }

    async fn get_json(&self, segments: &[&str], token: &AccessToken) -> Result<Value, ApiError> {
        self.send::<()>(Method::GET, segments, Some(token), None).await
    }
}

#[async_trait]
impl SubscriptionApi for HttpSubscriptionApi {
    async fn current_account(&self, token: &AccessToken) -> Result<Account, ApiError> {
        let body = self.get_json(&["api", "v1", "user", "me"], token).await?;
        account_from_body(body)
    }

    async fn list_for_user(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<Vec<RawSubscriptionRecord>, ApiError> {
        let [api, v1, subscription] = SUBSCRIPTION;
        let body = self
            .get_json(&[api, v1, subscription, "user", user_id.as_str()], token)
            .await?;
        let records = records_from_body(body);
        tracing::debug!(user_id = %user_id, count = records.len(), "Fetched subscriptions");
        Ok(records)
    }

    async fn get(
        &self,
        token: &AccessToken,
        id: &SubscriptionId,
    ) -> Result<RawSubscriptionRecord, ApiError> {
        let [api, v1, subscription] = SUBSCRIPTION;
        let body = self.get_json(&[api, v1, subscription, id.as_str()], token).await?;
        record_from_body(body)
    }

    async fn create(
        &self,
        token: &AccessToken,
        payload: &SubscriptionPayload,
    ) -> Result<RawSubscriptionRecord, ApiError> {
        let body = self
            .send(Method::POST, &SUBSCRIPTION, Some(token), Some(payload))
            .await?;
        record_from_body(body)
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &SubscriptionId,
        payload: &SubscriptionPayload,
    ) -> Result<RawSubscriptionRecord, ApiError> {
        let [api, v1, subscription] = SUBSCRIPTION;
        let body = self
            .send(
                Method::PUT,
                &[api, v1, subscription, id.as_str()],
                Some(token),
                Some(payload),
            )
            .await?;
        record_from_body(body)
    }

    async fn delete(&self, token: &AccessToken, id: &SubscriptionId) -> Result<(), ApiError> {
        let [api, v1, subscription] = SUBSCRIPTION;
        self.send::<()>(
            Method::DELETE,
            &[api, v1, subscription, id.as_str()],
            Some(token),
            None,
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl AuthApi for HttpSubscriptionApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let body = json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });
        let response = self
            .send(Method::POST, &["api", "v1", "auth", "sign-in"], None, Some(&body))
            .await?;
        session_from_body(response)
    }

    async fn sign_up(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        let body = json!({
            "name": registration.name,
            "email": registration.email,
            "password": registration.password.expose_secret(),
        });
        let response = self
            .send(Method::POST, &["api", "v1", "auth", "sign-up"], None, Some(&body))
            .await?;
        session_from_body(response)
    }
}
