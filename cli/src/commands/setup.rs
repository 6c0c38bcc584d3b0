//! `postiz setup`: write the deployment files and bring the stack up.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run the setup command.
///
/// # Errors
///
/// Returns an error if the runtime is unavailable, another operation holds
/// the deployment directory, or the files cannot be written.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let outcome = {
        let reporter = app.reporter();
        app.orchestrator().setup(&reporter).await?
    };
    super::finish(app, "setup", &outcome)
}
