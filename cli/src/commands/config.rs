//! `postiz config`: show and set CLI settings.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::SettingsStore;
use crate::application::services::settings as settings_service;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current settings
    Show,
    /// Set a setting value
    Set {
        /// Setting key, e.g. `timeouts.compose_secs`
        key: String,
        /// Setting value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the settings file
/// cannot be read or written.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_settings(app),
        ConfigCommand::Set { key, value } => set_setting(app, &key, &value),
    }
}

fn show_settings(app: &AppContext) -> Result<ExitCode> {
    let settings = settings_service::load_settings(&app.settings_store)?;
    let path = app.settings_store.path()?;
    app.renderer().render_settings(&settings, &path)?;
    Ok(ExitCode::SUCCESS)
}

fn set_setting(app: &AppContext, key: &str, value: &str) -> Result<ExitCode> {
    let settings = settings_service::set_setting(&app.settings_store, key, value)?;
    if app.is_json() {
        let path = app.settings_store.path()?;
        app.renderer().render_settings(&settings, &path)?;
    } else {
        app.output.success(&format!("Set {key} = {value}"));
    }
    Ok(ExitCode::SUCCESS)
}
