// crates/user-directory-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error taxonomy for directory operations.
// Purpose: Map the service's status-only error contract onto typed variants.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The directory signals every failure through the HTTP status alone:
//! 400 for a missing required field, 403 for both malformed email content and
//! duplicate logins, 404 for unknown logins on get and update. The variants
//! here preserve that taxonomy; anything outside it is surfaced verbatim as
//! [`DirectoryError::UnexpectedStatus`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Error raised by a directory operation.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The configured base URL could not be parsed.
    #[error("invalid base url {url}: {reason}")]
    BaseUrl {
        /// The rejected URL text.
        url: String,
        /// Parser failure description.
        reason: String,
    },
    /// The request never produced a response (connect, timeout, protocol).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request payload failed to serialize.
    #[error("{operation} request did not encode: {source}")]
    Encode {
        /// Operation that produced the payload.
        operation: &'static str,
        /// Serialization failure.
        #[source]
        source: serde_json::Error,
    },
    /// A 2xx response body did not match the expected shape.
    #[error("{operation} response did not decode: {source}")]
    Decode {
        /// Operation that received the body.
        operation: &'static str,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },
    /// The service answered 404: no record for the requested login.
    #[error("user not found")]
    NotFound,
    /// The service answered 400: a required field was missing.
    #[error("payload rejected: missing required field")]
    InvalidPayload,
    /// The service answered 403: malformed field content or duplicate login.
    #[error("request rejected by the directory")]
    Rejected,
    /// Any other non-2xx status, preserved with its body.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The status the service answered with.
        status: StatusCode,
        /// Raw response body for diagnostics.
        body: String,
    },
}

/// Maps a non-2xx status onto the contract's error taxonomy.
#[must_use]
pub(crate) fn error_for_status(status: StatusCode, body: String) -> DirectoryError {
    match status {
        StatusCode::NOT_FOUND => DirectoryError::NotFound,
        StatusCode::BAD_REQUEST => DirectoryError::InvalidPayload,
        StatusCode::FORBIDDEN => DirectoryError::Rejected,
        _ => DirectoryError::UnexpectedStatus {
            status,
            body,
        },
    }
}
