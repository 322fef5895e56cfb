// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Suite
// Description: Minimal end-to-end round trip against the directory target.
// Purpose: Verify the target is reachable and the core lifecycle works.
// Dependencies: helpers, user-directory-client
// ============================================================================

//! ## Overview
//! The contract's worked example, verbatim: create jakubn, get it back equal,
//! delete it, and observe the follow-up get answer 404.

use std::error::Error;
use std::time::Duration;

use helpers::artifacts::TestReporter;
use helpers::fixtures;
use helpers::harness::DirectoryHarness;
use helpers::readiness::wait_for_directory_ready;
use helpers::timeouts::DEFAULT_REQUEST_TIMEOUT;
use user_directory_client::DirectoryError;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn directory_round_trip() -> Result<(), Box<dyn Error>> {
    let mut reporter = TestReporter::new("directory_round_trip")?;
    let harness = DirectoryHarness::attach()?;
    let client = harness.client(DEFAULT_REQUEST_TIMEOUT)?;
    wait_for_directory_ready(&client, Duration::from_secs(10)).await?;

    let user = fixtures::jakubn();
    client.create_user(&user).await.map_err(|err| format!("create: {err}"))?;
    let fetched = client.user_by_login(&user.login).await.map_err(|err| format!("get: {err}"))?;
    let cleanup = client.delete_user(&user.login).await;
    if fetched != user {
        return Err("fetched record does not equal the created one".into());
    }
    cleanup.map_err(|err| format!("delete: {err}"))?;
    match client.user_by_login(&user.login).await {
        Err(DirectoryError::NotFound) => {}
        Ok(_) => return Err("record is still retrievable after delete".into()),
        Err(err) => return Err(format!("get after delete: {err}").into()),
    }

    reporter.artifacts().write_json("exchange_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["worked example round trip held end to end".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "exchange_transcript.json".to_string(),
        ],
    )?;
    Ok(())
}
