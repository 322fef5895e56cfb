// crates/user-directory-contract/src/email.rs
// ============================================================================
// Module: Email Well-Formedness
// Description: Syntactic email rule enforced by the directory on create.
// Purpose: Share one definition of "syntactically valid email" across the suite.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The directory rejects a create whose `email` is not syntactically valid,
//! and it signals that rejection with a 403 rather than the 400 used for
//! missing fields. The rule here is deliberately structural, not a full
//! address-spec parse: one `@`, a non-empty local part, and a dotted domain
//! with non-empty labels.

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Validation
// ============================================================================

/// Returns true when `email` satisfies the contract's syntactic rule.
#[must_use]
pub fn is_syntactically_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
