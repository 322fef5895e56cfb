// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Directory Harness
// Description: Target resolution for conformance scenarios.
// Purpose: Attach to a configured deployment or spawn the reference stub.
// Dependencies: system-tests, user-directory-client
// ============================================================================

//! ## Overview
//! A harness owns the target of one scenario. With
//! `USER_DIRECTORY_SYSTEM_TEST_BASE_URL` set the suites exercise that
//! deployment; otherwise each scenario gets a private stub whose lifetime is
//! tied to the harness.

use std::time::Duration;

use system_tests::config::SystemTestConfig;
use user_directory_client::DirectoryClient;

use super::directory_stub::DirectoryStubHandle;
use super::directory_stub::spawn_directory_stub;
use super::timeouts;

/// Resolved conformance target for one scenario.
pub struct DirectoryHarness {
    base_url: String,
    stub: Option<DirectoryStubHandle>,
}

impl DirectoryHarness {
    /// Attaches to the configured deployment or spawns a private stub.
    pub fn attach() -> Result<Self, String> {
        let config = SystemTestConfig::load()?;
        match config.base_url {
            Some(base_url) => Ok(Self {
                base_url,
                stub: None,
            }),
            None => {
                let stub = spawn_directory_stub()?;
                let base_url = stub.base_url().to_string();
                Ok(Self {
                    base_url,
                    stub: Some(stub),
                })
            }
        }
    }

    /// Returns the target base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true when the target is an externally shared deployment.
    pub fn is_shared_deployment(&self) -> bool {
        self.stub.is_none()
    }

    /// Builds a typed client for the target.
    pub fn client(&self, timeout: Duration) -> Result<DirectoryClient, String> {
        let timeout = timeouts::resolve_timeout(timeout);
        DirectoryClient::new(&self.base_url, timeout)
            .map_err(|err| format!("failed to build directory client: {err}"))
    }
}

// Intentionally no Drop impl: the stub handle tears its server down when the
// harness goes out of scope.
