//! Command implementations

pub mod config;
pub mod env;
pub mod providers;
pub mod redeploy;
pub mod setup;
pub mod shortcut;
pub mod start;
pub mod status;
pub mod stop;
pub mod update;
pub mod version;

use std::process::ExitCode;

use anyhow::Result;
use postiz_common::OutcomeKind;

use crate::app::AppContext;
use crate::domain::lifecycle::DeployOutcome;

/// Exit status for a partial failure: earlier steps persisted.
pub const EXIT_PARTIAL: u8 = 2;

/// Render `outcome` and map it to the process exit status.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn finish(app: &AppContext, operation: &str, outcome: &DeployOutcome) -> Result<ExitCode> {
    app.renderer()
        .render_outcome(operation, outcome, &app.settings.app.url)?;
    Ok(exit_code(outcome.kind()))
}

/// `0` on success, `2` on partial failure, `1` on fatal failure.
#[must_use]
pub fn exit_code(kind: OutcomeKind) -> ExitCode {
    match kind {
        OutcomeKind::Success => ExitCode::SUCCESS,
        OutcomeKind::PartialFailure => ExitCode::from(EXIT_PARTIAL),
        OutcomeKind::Fatal => ExitCode::FAILURE,
    }
}
