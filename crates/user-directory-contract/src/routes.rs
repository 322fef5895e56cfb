// crates/user-directory-contract/src/routes.rs
// ============================================================================
// Module: Contract Routes
// Description: Endpoint paths exposed by the User Directory Service.
// Purpose: Keep the exact exercised paths in one place.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The directory exposes five operations. Paths are relative to the service
//! base URL and are reproduced here exactly as exercised:
//! `POST createuser`, `GET user/{login}`, `GET users`, `PUT user`,
//! `DELETE deleteuser/{login}`.

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Route Builders
// ============================================================================

/// Relative path for creating a user (`POST`).
pub const CREATE_USER: &str = "createuser";

/// Relative path for listing all users (`GET`).
pub const LIST_USERS: &str = "users";

/// Relative path for updating a user in place (`PUT`).
pub const UPDATE_USER: &str = "user";

/// Returns the relative path for fetching one user by login (`GET`).
#[must_use]
pub fn user_by_login(login: &str) -> String {
    format!("user/{login}")
}

/// Returns the relative path for removing one user by login (`DELETE`).
#[must_use]
pub fn delete_user(login: &str) -> String {
    format!("deleteuser/{login}")
}
