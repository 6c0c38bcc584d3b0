//! `postiz update`: pull newer images and recreate the stack.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::output::human::FULL_UPDATE;

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Take the stack down before pulling, then bring it back up.
    /// Any failure aborts the rest and may leave the stack stopped.
    #[arg(long)]
    pub full: bool,
}

/// Run the update command.
///
/// # Errors
///
/// Returns an error when a precondition fails or the prompt cannot be shown.
pub async fn run(app: &AppContext, args: &UpdateArgs) -> Result<ExitCode> {
    let prompt = if args.full {
        "Stop Postiz, pull the latest images and start it again?"
    } else {
        "Pull the latest images and recreate the Postiz containers?"
    };
    if !app.confirm(prompt, true)? {
        app.output.info("Update cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = {
        let reporter = app.reporter();
        let orchestrator = app.orchestrator();
        if args.full {
            orchestrator.full_update(&reporter).await?
        } else {
            orchestrator.update(&reporter).await?
        }
    };
    let operation = if args.full { FULL_UPDATE } else { "update" };
    super::finish(app, operation, &outcome)
}
