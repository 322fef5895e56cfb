// crates/user-directory-contract/src/lib.rs
// ============================================================================
// Module: User Directory Contract
// Description: Canonical wire model and endpoint surface of the User Directory Service.
// Purpose: Provide the shared contract shapes consumed by the client and the suites.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This crate defines the external contract of the User Directory Service: the
//! `User` wire model, the partial-payload draft used to probe validation
//! failures, the endpoint paths, and the email well-formedness rule the
//! service enforces on create. The contract is status-code driven; no
//! structured error body is part of it.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod email;
pub mod routes;
mod types;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use types::User;
pub use types::UserDraft;
