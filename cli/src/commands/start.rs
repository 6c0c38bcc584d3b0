//! `postiz start`: bring a configured stack up.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run the start command.
///
/// # Errors
///
/// Returns an error when a precondition fails: runtime unavailable, not
/// configured, or busy.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let outcome = {
        let reporter = app.reporter();
        app.orchestrator().start(&reporter).await?
    };
    super::finish(app, "start", &outcome)
}
