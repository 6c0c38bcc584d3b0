//! `postiz stop`: take the stack down. Data directories are kept.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run the stop command.
///
/// # Errors
///
/// Returns an error when a precondition fails: runtime unavailable, not
/// configured, or busy.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let outcome = {
        let reporter = app.reporter();
        app.orchestrator().stop(&reporter).await?
    };
    super::finish(app, "stop", &outcome)
}
