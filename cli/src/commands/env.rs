//! `postiz env`: inspect the deployment's env file.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;
use postiz_common::is_secret_key;

use crate::app::AppContext;
use crate::application::services::providers as provider_service;
use crate::domain::env_file::{EnvMap, mask};

/// Env subcommands.
#[derive(Subcommand)]
pub enum EnvCommand {
    /// Print every key in the env file. Secrets are masked.
    Show {
        /// Print secret values in full
        #[arg(long)]
        reveal: bool,
    },
}

/// Run an env subcommand.
///
/// # Errors
///
/// Returns an error if the env file cannot be read.
pub async fn run(app: &AppContext, cmd: EnvCommand) -> Result<ExitCode> {
    match cmd {
        EnvCommand::Show { reveal } => {
            let vars = provider_service::read_env(&app.env_store, &app.target).await?;
            let entries = display_entries(&vars, reveal);
            app.renderer().render_env(&app.target.env_path(), &entries)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Document order, with secret values masked unless `reveal` is set.
#[must_use]
pub fn display_entries(vars: &EnvMap, reveal: bool) -> Vec<(String, String)> {
    vars.iter()
        .map(|(key, value)| {
            let shown = if reveal || !is_secret_key(key) {
                value.clone()
            } else {
                mask(value)
            };
            (key.clone(), shown)
        })
        .collect()
}
