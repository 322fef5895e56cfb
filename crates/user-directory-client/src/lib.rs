// crates/user-directory-client/src/lib.rs
// ============================================================================
// Module: User Directory Client
// Description: Typed HTTP client for the User Directory Service.
// Purpose: Issue the five directory operations with a result/error distinction.
// Dependencies: reqwest, serde, thiserror, url, user-directory-contract
// ============================================================================

//! ## Overview
//! One [`DirectoryClient`] is built per scenario and reuses a single
//! connection-pooling `reqwest::Client` across every call. Each contract
//! operation has a typed request builder; non-2xx statuses surface as typed
//! [`DirectoryError`] values instead of panics, and every exchange is
//! recorded in a transcript for artifact export.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod client;
mod error;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::DirectoryClient;
pub use client::ExchangeRecord;
pub use error::DirectoryError;
