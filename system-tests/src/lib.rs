// system-tests/src/lib.rs
// ============================================================================
// Module: User Directory System Tests Library
// Description: Shared configuration and helpers for conformance scenarios.
// Purpose: Provide common utilities for the directory system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the shared configuration used by the User Directory
//! conformance binaries in `system-tests/tests`. The target deployment, the
//! request timeout floor, and the artifact root are all environment-driven;
//! when no deployment is configured the suites spawn their own reference
//! stub.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
