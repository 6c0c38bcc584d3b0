//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Deployment errors ─────────────────────────────────────────────────────────

/// Errors surfaced by lifecycle operations.
///
/// `RuntimeNotAvailable`, `NotConfigured` and `Busy` are precondition
/// failures raised before any compose command runs. `CommandFailed` and
/// `PartialFailure` are produced from a non-success `DeployOutcome` by
/// callers that want `?` semantics.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Container runtime is not available. Start it and try again.")]
    RuntimeNotAvailable,

    #[error("Deployment at {dir} is not configured (missing {missing}). Run 'postiz setup' first.")]
    NotConfigured { dir: String, missing: String },

    #[error("`{subcommand}` failed:\n{output}")]
    CommandFailed { subcommand: String, output: String },

    #[error(
        "Earlier steps succeeded but `{subcommand}` failed at stage '{stage}'. \
Only this step needs to be retried.\n{output}"
    )]
    PartialFailure {
        stage: String,
        subcommand: String,
        output: String,
    },

    #[error("Another deployment operation is already running for {target}.")]
    Busy { target: String },
}

// ── Provider errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Unknown provider '{name}'.\n\nAvailable providers: {available}")]
    Unknown { name: String, available: String },

    #[error("{provider} has no extra setting.")]
    NoExtraKey { provider: String },

    #[error("Nothing to change for {provider}. Pass --client-id, --client-secret or --extra.")]
    EmptyEdit { provider: String },

    #[error("Value for {key} must be a single line.")]
    MultilineValue { key: String },
}

// ── Settings errors ───────────────────────────────────────────────────────────

/// Errors related to settings key/value validation.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nExpected: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}
