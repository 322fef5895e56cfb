// crates/user-directory-client/src/client.rs
// ============================================================================
// Module: Directory Client
// Description: Typed request builders for the directory contract.
// Purpose: Drive the five operations over one reused reqwest client.
// Dependencies: reqwest, serde_json, url, user-directory-contract
// ============================================================================

//! ## Overview
//! Operations mirror the contract table one-for-one: create, get by login,
//! list, update, delete. The typed operations map statuses onto
//! [`DirectoryError`]; the `*_raw` probes return the status and body
//! untouched so suites can assert exact codes for deliberately malformed
//! payloads. Delete is best-effort by contract, so it reports the status
//! without interpreting it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use user_directory_contract::User;
use user_directory_contract::routes;

use crate::error::DirectoryError;
use crate::error::error_for_status;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded request/response exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRecord {
    /// 1-based position of the exchange in the transcript.
    pub sequence: u64,
    /// Contract operation that issued the request.
    pub operation: String,
    /// Request payload, or `Value::Null` for body-less operations.
    pub request: Value,
    /// Status the service answered with.
    pub status: u16,
    /// Raw response body.
    pub response: String,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Typed client for one User Directory deployment.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    base_url: Url,
    client: Client,
    transcript: Arc<Mutex<Vec<ExchangeRecord>>>,
}

impl DirectoryClient {
    /// Creates a client for the directory at `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DirectoryError> {
        let mut normalized = base_url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|err| DirectoryError::BaseUrl {
            url: normalized.clone(),
            reason: err.to_string(),
        })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Returns a snapshot of the recorded exchanges.
    #[must_use]
    pub fn transcript(&self) -> Vec<ExchangeRecord> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Creates a user record (`POST createuser`).
    ///
    /// The contract asserts retrievability rather than an echoed body, so a
    /// 2xx answer yields `Ok(())` and verification goes through a follow-up
    /// get.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidPayload`] on 400 (missing field),
    /// [`DirectoryError::Rejected`] on 403 (malformed email content or
    /// duplicate login), or a transport/unexpected-status error.
    pub async fn create_user(&self, user: &User) -> Result<(), DirectoryError> {
        let payload = encode("create_user", user)?;
        let builder = self.client.post(self.endpoint(routes::CREATE_USER)?).json(&payload);
        let (status, body) = self.dispatch("create_user", payload, builder).await?;
        if status.is_success() {
            return Ok(());
        }
        Err(error_for_status(status, body))
    }

    /// Fetches one user by login (`GET user/{login}`).
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] on 404, or a transport, decode,
    /// or unexpected-status error.
    pub async fn user_by_login(&self, login: &str) -> Result<User, DirectoryError> {
        let builder = self.client.get(self.endpoint(&routes::user_by_login(login))?);
        let (status, body) = self.dispatch("user_by_login", Value::Null, builder).await?;
        if status.is_success() {
            return decode("user_by_login", &body);
        }
        Err(error_for_status(status, body))
    }

    /// Lists every live user record (`GET users`).
    ///
    /// # Errors
    ///
    /// Returns a transport, decode, or unexpected-status error.
    pub async fn users(&self) -> Result<Vec<User>, DirectoryError> {
        let builder = self.client.get(self.endpoint(routes::LIST_USERS)?);
        let (status, body) = self.dispatch("users", Value::Null, builder).await?;
        if status.is_success() {
            return decode("users", &body);
        }
        Err(error_for_status(status, body))
    }

    /// Replaces every mutable field of an existing user (`PUT user`).
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] when no record carries the login,
    /// or a transport/unexpected-status error.
    pub async fn update_user(&self, user: &User) -> Result<(), DirectoryError> {
        let payload = encode("update_user", user)?;
        let builder = self.client.put(self.endpoint(routes::UPDATE_USER)?).json(&payload);
        let (status, body) = self.dispatch("update_user", payload, builder).await?;
        if status.is_success() {
            return Ok(());
        }
        Err(error_for_status(status, body))
    }

    /// Removes a user by login (`DELETE deleteuser/{login}`).
    ///
    /// Deletion is best-effort cleanup by contract: the status is returned
    /// uninterpreted and deleting an absent login is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request itself fails to complete.
    pub async fn delete_user(&self, login: &str) -> Result<StatusCode, DirectoryError> {
        let builder = self.client.delete(self.endpoint(&routes::delete_user(login))?);
        let (status, _body) = self.dispatch("delete_user", Value::Null, builder).await?;
        Ok(status)
    }

    /// Sends an arbitrary JSON payload to `POST createuser`.
    ///
    /// Suites use this to probe validation with fields deliberately missing
    /// or malformed; the status and body come back untouched.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request itself fails to complete.
    pub async fn create_user_raw(
        &self,
        payload: &Value,
    ) -> Result<(StatusCode, String), DirectoryError> {
        let builder = self.client.post(self.endpoint(routes::CREATE_USER)?).json(payload);
        self.dispatch("create_user_raw", payload.clone(), builder).await
    }

    /// Sends an arbitrary JSON payload to `PUT user`.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request itself fails to complete.
    pub async fn update_user_raw(
        &self,
        payload: &Value,
    ) -> Result<(StatusCode, String), DirectoryError> {
        let builder = self.client.put(self.endpoint(routes::UPDATE_USER)?).json(payload);
        self.dispatch("update_user_raw", payload.clone(), builder).await
    }

    /// Resolves a relative contract path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, DirectoryError> {
        self.base_url.join(path).map_err(|err| DirectoryError::BaseUrl {
            url: format!("{}{path}", self.base_url),
            reason: err.to_string(),
        })
    }

    /// Sends one request and records the exchange in the transcript.
    async fn dispatch(
        &self,
        operation: &'static str,
        request: Value,
        builder: RequestBuilder,
    ) -> Result<(StatusCode, String), DirectoryError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        self.record(operation, request, status, &body);
        Ok((status, body))
    }

    /// Appends one exchange record; a poisoned transcript is skipped.
    fn record(&self, operation: &str, request: Value, status: StatusCode, body: &str) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(ExchangeRecord {
            sequence,
            operation: operation.to_string(),
            request,
            status: status.as_u16(),
            response: body.to_string(),
        });
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serializes a typed payload into the transcript-friendly JSON form.
fn encode<T: Serialize>(operation: &'static str, value: &T) -> Result<Value, DirectoryError> {
    serde_json::to_value(value).map_err(|err| DirectoryError::Encode {
        operation,
        source: err,
    })
}

/// Decodes a 2xx response body into the expected shape.
fn decode<T: DeserializeOwned>(operation: &'static str, body: &str) -> Result<T, DirectoryError> {
    serde_json::from_str(body).map_err(|err| DirectoryError::Decode {
        operation,
        source: err,
    })
}
