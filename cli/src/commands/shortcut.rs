//! `postiz shortcut`: install a launcher for this binary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ShortcutInstaller;
use crate::application::services::shortcut::install_shortcut;
use crate::infra::settings::home_dir;
use crate::infra::shortcut::{NativeLinkInstaller, ScriptInstaller};

/// Arguments for the shortcut command.
#[derive(Args)]
pub struct ShortcutArgs {
    /// Directory to install into [default: ~/.local/bin]
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Run the shortcut command.
///
/// # Errors
///
/// Returns an error when every installer fails.
pub fn run(app: &AppContext, args: ShortcutArgs) -> Result<ExitCode> {
    let binary = std::env::current_exe().context("locating the postiz binary")?;
    let dir = match args.dir {
        Some(dir) => dir,
        None => home_dir()?.join(".local").join("bin"),
    };
    let installers: [&dyn ShortcutInstaller; 2] = [&NativeLinkInstaller, &ScriptInstaller];
    let (name, path) = install_shortcut(&installers, &binary, &dir, &app.reporter())?;
    app.renderer().render_shortcut(name, &path)?;
    Ok(ExitCode::SUCCESS)
}
