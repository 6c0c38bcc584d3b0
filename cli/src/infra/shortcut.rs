//! Launcher installers implementing the `ShortcutInstaller` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ShortcutInstaller;
use crate::infra::fs::write_atomic;

/// Symlinks the binary into the target directory. Unix only.
pub struct NativeLinkInstaller;

impl ShortcutInstaller for NativeLinkInstaller {
    fn name(&self) -> &'static str {
        "symlink"
    }

    #[cfg(unix)]
    fn install(&self, binary: &Path, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let link = dir.join("postiz");
        if link.symlink_metadata().is_ok() {
            std::fs::remove_file(&link)
                .with_context(|| format!("replacing existing {}", link.display()))?;
        }
        std::os::unix::fs::symlink(binary, &link)
            .with_context(|| format!("linking {} -> {}", link.display(), binary.display()))?;
        Ok(link)
    }

    #[cfg(not(unix))]
    fn install(&self, _binary: &Path, _dir: &Path) -> Result<PathBuf> {
        anyhow::bail!("symbolic links are not supported on this platform")
    }
}

/// Writes a small launcher script that execs the binary.
pub struct ScriptInstaller;

impl ShortcutInstaller for ScriptInstaller {
    fn name(&self) -> &'static str {
        "launcher script"
    }

    fn install(&self, binary: &Path, dir: &Path) -> Result<PathBuf> {
        let (file, content, mode) = script_for(binary);
        let path = dir.join(file);
        write_atomic(&path, content.as_bytes(), mode)?;
        Ok(path)
    }
}

#[cfg(unix)]
fn script_for(binary: &Path) -> (&'static str, String, u32) {
    let quoted = binary.display().to_string().replace('\'', r"'\''");
    ("postiz", format!("#!/bin/sh\nexec '{quoted}' \"$@\"\n"), 0o755)
}

#[cfg(not(unix))]
fn script_for(binary: &Path) -> (&'static str, String, u32) {
    ("postiz.cmd", format!("@echo off\r\n\"{}\" %*\r\n", binary.display()), 0o644)
}
