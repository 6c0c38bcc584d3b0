//! CLI settings schema and validators.
//!
//! Pure functions only. Loading and saving lives in `infra::settings`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::SettingsError;
use crate::domain::target::DeploymentTarget;

pub const VALID_SETTINGS_KEYS: &[&str] = &[
    "runtime.program",
    "deployment.dir",
    "timeouts.compose_secs",
    "timeouts.probe_secs",
    "app.url",
];

pub const DEFAULT_APP_URL: &str = "http://localhost:5000";
pub const DEFAULT_RUNTIME: &str = "docker";
pub const DEFAULT_COMPOSE_SECS: u64 = 120;
pub const DEFAULT_PROBE_SECS: u64 = 10;

/// Top-level settings stored in `~/.postiz/settings.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PostizSettings {
    pub runtime: RuntimeSettings,
    pub deployment: DeploymentSettings,
    pub timeouts: TimeoutSettings,
    pub app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeSettings {
    /// Container runtime CLI, e.g. `docker` or `podman`.
    pub program: String,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_RUNTIME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DeploymentSettings {
    /// Deployment directory. Empty means `<home>/Postiz`.
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimeoutSettings {
    /// Limit for `up`, `pull` and `down`.
    pub compose_secs: u64,
    /// Limit for runtime probes and `ps`.
    pub probe_secs: u64,
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            compose_secs: DEFAULT_COMPOSE_SECS,
            probe_secs: DEFAULT_PROBE_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    pub url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_APP_URL.to_string(),
        }
    }
}

impl PostizSettings {
    #[must_use]
    pub fn compose_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.compose_secs)
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.timeouts.probe_secs)
    }

    /// The configured deployment directory, falling back to `<home>/Postiz`.
    #[must_use]
    pub fn target(&self, home: &Path) -> DeploymentTarget {
        if self.deployment.dir.trim().is_empty() {
            DeploymentTarget::under_home(home)
        } else {
            DeploymentTarget::new(PathBuf::from(self.deployment.dir.trim()))
        }
    }

    /// Read a setting by dotted key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not in the whitelist.
    pub fn get(&self, key: &str) -> Result<String> {
        validate_settings_key(key)?;
        Ok(match key {
            "runtime.program" => self.runtime.program.clone(),
            "deployment.dir" => self.deployment.dir.clone(),
            "timeouts.compose_secs" => self.timeouts.compose_secs.to_string(),
            "timeouts.probe_secs" => self.timeouts.probe_secs.to_string(),
            _ => self.app.url.clone(),
        })
    }

    /// Validate and apply a setting by dotted key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        validate_settings_key(key)?;
        validate_settings_value(key, value)?;
        match key {
            "runtime.program" => self.runtime.program = value.to_string(),
            "deployment.dir" => self.deployment.dir = value.to_string(),
            "timeouts.compose_secs" => self.timeouts.compose_secs = parse_secs(value)?,
            "timeouts.probe_secs" => self.timeouts.probe_secs = parse_secs(value)?,
            _ => self.app.url = value.to_string(),
        }
        Ok(())
    }
}

fn parse_secs(value: &str) -> Result<u64> {
    Ok(value.parse::<u64>()?)
}

/// Validates a settings key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_settings_key(key: &str) -> Result<()> {
    if !VALID_SETTINGS_KEYS.contains(&key) {
        return Err(SettingsError::UnknownKey {
            key: key.to_string(),
            valid: VALID_SETTINGS_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a settings value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_settings_value(key: &str, value: &str) -> Result<()> {
    let invalid = |expected: &str| SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    };
    match key {
        "runtime.program" if value.trim().is_empty() || value.contains(char::is_whitespace) => {
            Err(invalid("a program name without spaces, e.g. docker or podman").into())
        }
        "timeouts.compose_secs" | "timeouts.probe_secs"
            if !value.parse::<u64>().is_ok_and(|n| (1..=3600).contains(&n)) =>
        {
            Err(invalid("whole seconds between 1 and 3600").into())
        }
        "app.url" if !(value.starts_with("http://") || value.starts_with("https://")) => {
            Err(invalid("an http:// or https:// URL").into())
        }
        _ => Ok(()),
    }
}
