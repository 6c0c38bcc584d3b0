//! `postiz redeploy`: recreate containers so they pick up the env file.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run the redeploy command.
///
/// # Errors
///
/// Returns an error when a precondition fails: runtime unavailable, not
/// configured, or busy.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let outcome = {
        let reporter = app.reporter();
        app.orchestrator().redeploy(&reporter).await?
    };
    super::finish(app, "redeploy", &outcome)
}
