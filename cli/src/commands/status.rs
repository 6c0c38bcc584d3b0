//! `postiz status`: report the lifecycle state and the next step.

use std::process::ExitCode;

use anyhow::Result;
use postiz_common::StatusOutput;

use crate::app::AppContext;

/// Run the status command. Never takes the operation gate.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let (state, runtime) = app.orchestrator().snapshot().await;
    let status = StatusOutput {
        state,
        runtime,
        deployment_dir: app.target.to_string(),
        app_url: app.settings.app.url.clone(),
        checked_at: chrono::Utc::now(),
    };
    app.renderer().render_status(&status)?;
    Ok(ExitCode::SUCCESS)
}
