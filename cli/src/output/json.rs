//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the pretty printer for successful results.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::error::{DeployError, ProviderError, SettingsError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for an error chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<DeployError>() {
        return match e {
            DeployError::RuntimeNotAvailable => "runtime_not_available",
            DeployError::NotConfigured { .. } => "not_configured",
            DeployError::CommandFailed { .. } => "command_failed",
            DeployError::PartialFailure { .. } => "partial_failure",
            DeployError::Busy { .. } => "busy",
        };
    }
    if let Some(e) = err.downcast_ref::<ProviderError>() {
        return match e {
            ProviderError::Unknown { .. } => "unknown_provider",
            ProviderError::NoExtraKey { .. }
            | ProviderError::EmptyEdit { .. }
            | ProviderError::MultilineValue { .. } => {
                "invalid_provider_edit"
            }
        };
    }
    if err.downcast_ref::<SettingsError>().is_some() {
        return "invalid_setting";
    }
    "error"
}

/// Renders serializable results as pretty JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{json}");
        Ok(())
    }
}
