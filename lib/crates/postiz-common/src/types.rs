use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a deployment, recomputed from live observation on
/// every query and never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// The container runtime is not running (or not installed).
    RuntimeUnavailable,
    /// Deployment directory, `.env` or compose file is missing.
    NotConfigured,
    /// Setup artifacts exist but the application service is not running.
    ConfiguredNotRunning,
    Running,
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::RuntimeUnavailable => "runtime unavailable",
            Self::NotConfigured => "not configured",
            Self::ConfiguredNotRunning => "configured, not running",
            Self::Running => "running",
        })
    }
}

/// Independent runtime facts: installed-but-not-running is its own state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RuntimeStatus {
    pub installed: bool,
    pub running: bool,
}

/// `postiz status --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOutput {
    pub state: LifecycleState,
    pub runtime: RuntimeStatus,
    pub deployment_dir: String,
    pub app_url: String,
    pub checked_at: DateTime<Utc>,
}

/// Result classification of a lifecycle operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    PartialFailure,
    Fatal,
}

/// JSON rendering of a lifecycle operation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeOutput {
    pub operation: String,
    pub outcome: OutcomeKind,
    pub completed_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_step: Option<String>,
    /// The exact compose subcommand that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcommand: Option<String>,
    /// Full captured output of the failed step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// One row of `postiz providers list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub name: String,
    pub display_name: String,
    pub configured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_label: Option<String>,
}
