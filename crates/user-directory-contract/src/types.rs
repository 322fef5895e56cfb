// crates/user-directory-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Wire model for User Directory records.
// Purpose: Provide the canonical serialized shape of a directory user.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The directory stores exactly one entity: a `User` keyed by its `login`.
//! The wire form is a JSON object with the camelCase string fields `login`,
//! `email`, `firstName`, and `lastName`, all required for a create to
//! succeed. [`UserDraft`] mirrors the same shape with every field optional so
//! suites can serialize payloads with fields deliberately omitted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Contract Types
// ============================================================================

/// A directory user record.
///
/// # Invariants
/// - `login` is globally unique among live records; the service rejects a
///   second create for an existing login.
/// - Equality is equality of all four fields.
/// - Updates replace every field except `login`; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier and primary key of the record.
    pub login: String,
    /// Contact address; must be syntactically valid for create to succeed.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl User {
    /// Creates a user record from owned or borrowed string parts.
    #[must_use]
    pub fn new(
        login: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Partial user payload for exercising create/update validation.
///
/// Fields left as `None` are omitted from the serialized object entirely,
/// which is how the suites express "missing required field" requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Optional login field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Optional email field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional given-name field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Optional family-name field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl UserDraft {
    /// Sets the login field.
    #[must_use]
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Sets the email field.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the given-name field.
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the family-name field.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

impl From<User> for UserDraft {
    fn from(user: User) -> Self {
        Self {
            login: Some(user.login),
            email: Some(user.email),
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
        }
    }
}
