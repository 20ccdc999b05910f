//! In-memory `SubscriptionApi` and `AuthApi` for tests and local development.
//!
//! Stores raw records verbatim, so tests can seed the same malformed shapes
//! the real upstream produces (`renewaltDate`, `_id`, missing fields).
//! Records are shared by every account.
//!
//! # Example
//!
//! ```ignore
//! let api = InMemorySubscriptionApi::new()
//!     .with_account("valid-token", "user-1")
//!     .with_login("user-1@test.example.com", "secret1")
//!     .with_record(json!({ "_id": "s1", "name": "Netflix", "status": "active" }));
//! ```

use std::sync::RwLock;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::domain::account::Account;
use crate::domain::auth::{Credentials, Registration};
use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{normalize, RawSubscriptionRecord, SubscriptionPayload};
use crate::ports::{AccessToken, ApiError, AuthApi, AuthSession, SubscriptionApi};

#[derive(Debug)]
struct StoredAccount {
    token: String,
    account: Account,
    /// Sign-in password; accounts seeded without one cannot sign in.
    password: Option<String>,
}

#[derive(Debug, Default)]
pub struct InMemorySubscriptionApi {
    accounts: RwLock<Vec<StoredAccount>>,
    records: RwLock<Vec<RawSubscriptionRecord>>,
    /// Returned from every call when set.
    force_error: RwLock<Option<ApiError>>,
    next_id: RwLock<u64>,
}

impl InMemorySubscriptionApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` as belonging to `user_id`.
    pub fn with_account(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let account = Account {
            id: UserId::new(user_id.clone()).expect("account user id must be non-empty"),
            name: Some(format!("Test User {}", user_id)),
            email: Some(format!("{}@test.example.com", user_id)),
            created_at: None,
        };
        self.accounts.write().unwrap().push(StoredAccount {
            token: token.into(),
            account,
            password: None,
        });
        self
    }

    /// Lets the most recently added account sign in with `email`/`password`.
    pub fn with_login(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        if let Some(stored) = self.accounts.write().unwrap().last_mut() {
            stored.account.email = Some(email.into());
            stored.password = Some(password.into());
        }
        self
    }

    /// Seeds a raw record from JSON.
    pub fn with_record(self, record: Value) -> Self {
        self.records
            .write()
            .unwrap()
            .push(RawSubscriptionRecord::from_value(record));
        self
    }

    /// Forces all calls to fail with `error`.
    pub fn with_error(self, error: ApiError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Snapshot of the stored records.
    pub fn records(&self) -> Vec<RawSubscriptionRecord> {
        self.records.read().unwrap().clone()
    }

    fn check_forced_error(&self) -> Result<(), ApiError> {
        match self.force_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn authorize(&self, token: &AccessToken) -> Result<Account, ApiError> {
        self.check_forced_error()?;
        self.accounts
            .read()
            .unwrap()
            .iter()
            .find(|stored| stored.token == token.expose())
            .map(|stored| stored.account.clone())
            .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()))
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut next = self.next_id.write().unwrap();
        *next += 1;
        format!("{}-{}", prefix, *next)
    }

    fn session(stored: &StoredAccount) -> Result<AuthSession, ApiError> {
        let token = AccessToken::new(stored.token.clone()).ok_or(ApiError::MissingToken)?;
        Ok(AuthSession {
            token,
            account: Some(stored.account.clone()),
        })
    }

    fn position(&self, id: &SubscriptionId) -> Option<usize> {
        self.records
            .read()
            .unwrap()
            .iter()
            .position(|raw| normalize(raw).id.as_ref() == Some(id))
    }

    fn to_raw(id: &str, payload: &SubscriptionPayload) -> RawSubscriptionRecord {
        let mut value = serde_json::to_value(payload).unwrap_or_else(|_| json!({}));
        if let Value::Object(map) = &mut value {
            map.insert("_id".to_string(), json!(id));
            map.insert("status".to_string(), json!("active"));
        }
        RawSubscriptionRecord::from_value(value)
    }
}

#[async_trait]
impl SubscriptionApi for InMemorySubscriptionApi {
    async fn current_account(&self, token: &AccessToken) -> Result<Account, ApiError> {
        self.authorize(token)
    }

    async fn list_for_user(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<Vec<RawSubscriptionRecord>, ApiError> {
        let account = self.authorize(token)?;
        if account.id != *user_id {
            return Err(ApiError::from_status(403, "Not allowed"));
        }
        Ok(self.records())
    }

    async fn get(
        &self,
        token: &AccessToken,
        id: &SubscriptionId,
    ) -> Result<RawSubscriptionRecord, ApiError> {
        self.authorize(token)?;
        let index = self
            .position(id)
            .ok_or_else(|| ApiError::NotFound("Subscription not found".to_string()))?;
        Ok(self.records.read().unwrap()[index].clone())
    }

    async fn create(
        &self,
        token: &AccessToken,
        payload: &SubscriptionPayload,
    ) -> Result<RawSubscriptionRecord, ApiError> {
        self.authorize(token)?;
        let id = self.next_id("mem");
        let raw = Self::to_raw(&id, payload);
        self.records.write().unwrap().push(raw.clone());
        Ok(raw)
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &SubscriptionId,
        payload: &SubscriptionPayload,
    ) -> Result<RawSubscriptionRecord, ApiError> {
        self.authorize(token)?;
        let index = self
            .position(id)
            .ok_or_else(|| ApiError::NotFound("Subscription not found".to_string()))?;
        let raw = Self::to_raw(id.as_str(), payload);
        self.records.write().unwrap()[index] = raw.clone();
        Ok(raw)
    }

    async fn delete(&self, token: &AccessToken, id: &SubscriptionId) -> Result<(), ApiError> {
        self.authorize(token)?;
        let index = self
            .position(id)
            .ok_or_else(|| ApiError::NotFound("Subscription not found".to_string()))?;
        self.records.write().unwrap().remove(index);
        Ok(())
    }
}

#[async_trait]
impl AuthApi for InMemorySubscriptionApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        self.check_forced_error()?;
        let accounts = self.accounts.read().unwrap();
        let stored = accounts
            .iter()
            .find(|stored| {
                stored.account.email.as_deref() == Some(credentials.email.as_str())
                    && stored.password.as_deref()
                        == Some(credentials.password.expose_secret().as_str())
            })
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;
        Self::session(stored)
    }

    async fn sign_up(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        self.check_forced_error()?;
        let taken = self
            .accounts
            .read()
            .unwrap()
            .iter()
            .any(|stored| stored.account.email.as_deref() == Some(registration.email.as_str()));
        if taken {
            return Err(ApiError::Conflict("User already exists".to_string()));
        }

        let user_id = UserId::new(self.next_id("user"))
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let stored = StoredAccount {
            token: self.next_id("token"),
            account: Account {
                id: user_id,
                name: Some(registration.name.clone()),
                email: Some(registration.email.clone()),
                created_at: None,
            },
            password: Some(registration.password.expose_secret().clone()),
        };
        let session = Self::session(&stored)?;
        self.accounts.write().unwrap().push(stored);
        Ok(session)
    }
}
