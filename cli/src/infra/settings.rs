//! Infrastructure implementation of the `SettingsStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::SettingsStore;
use crate::domain::settings::PostizSettings;
use crate::infra::fs::{PRIVATE_MODE, write_atomic};

/// Overrides the settings file location.
pub const SETTINGS_ENV: &str = "POSTIZ_SETTINGS";
/// Overrides `deployment.dir`.
pub const HOME_ENV: &str = "POSTIZ_HOME";
/// Overrides `runtime.program`.
pub const RUNTIME_ENV: &str = "POSTIZ_RUNTIME";

/// Production implementation of `SettingsStore` that uses a YAML file on disk.
pub struct YamlSettingsStore;

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Result<PostizSettings> {
        let path = self.path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no settings file; using defaults");
            return Ok(PostizSettings::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn save(&self, settings: &PostizSettings) -> Result<()> {
        let path = self.path()?;
        let content = serde_yaml::to_string(settings).context("cannot serialize settings")?;
        write_atomic(&path, content.as_bytes(), PRIVATE_MODE)
            .with_context(|| format!("cannot write {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(SETTINGS_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".postiz").join("settings.yaml"))
    }
}

/// Apply `POSTIZ_HOME` and `POSTIZ_RUNTIME`, which take precedence over
/// the settings file. Empty values are ignored.
pub fn apply_env_overrides(settings: &mut PostizSettings) {
    if let Some(dir) = std::env::var(HOME_ENV).ok().filter(|v| !v.trim().is_empty()) {
        debug!(dir = %dir, "deployment dir overridden from environment");
        settings.deployment.dir = dir;
    }
    if let Some(program) = std::env::var(RUNTIME_ENV).ok().filter(|v| !v.trim().is_empty()) {
        debug!(program = %program, "runtime overridden from environment");
        settings.runtime.program = program;
    }
}

/// The user's home directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))
}
