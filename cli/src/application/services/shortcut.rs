//! Application service: launcher installation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{ProgressReporter, ShortcutInstaller};

/// Try each installer in order and keep the first that succeeds. Returns
/// the installer's name and the path it created.
///
/// # Errors
///
/// Returns the last installer's error when every installer fails.
pub fn install_shortcut(
    installers: &[&dyn ShortcutInstaller],
    binary: &Path,
    dir: &Path,
    reporter: &impl ProgressReporter,
) -> Result<(&'static str, PathBuf)> {
    let mut last_err = anyhow::anyhow!("no shortcut installer available");
    for installer in installers {
        match installer.install(binary, dir) {
            Ok(path) => return Ok((installer.name(), path)),
            Err(e) => {
                debug!(installer = installer.name(), error = %e, "shortcut installer failed");
                reporter.warn(&format!("{} failed: {e}", installer.name()));
                last_err = e;
            }
        }
    }
    Err(last_err)
}
