//! Lifecycle state detection and operation outcomes.
//!
//! State is never stored. It is recomputed from an [`Observation`] gathered
//! by the orchestrator from live probes on every query.

use postiz_common::{OutcomeKind, OutcomeOutput};

use crate::domain::compose::ComposeStep;
use crate::domain::error::DeployError;

pub use postiz_common::LifecycleState;

/// Facts gathered from the runtime and the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Observation {
    pub runtime_running: bool,
    pub dir_exists: bool,
    pub env_exists: bool,
    pub compose_exists: bool,
    /// `None` when `ps` was not run (an earlier check already decided) or
    /// when the `ps` call itself failed.
    pub app_running: Option<bool>,
}

impl Observation {
    /// Whether every setup artifact is on disk.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.dir_exists && self.env_exists && self.compose_exists
    }

    /// Names of the missing setup artifacts, for diagnostics.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.dir_exists {
            missing.push("deployment directory");
        }
        if !self.env_exists {
            missing.push(".env");
        }
        if !self.compose_exists {
            missing.push("docker-compose.yml");
        }
        missing
    }
}

/// Map observed facts to a lifecycle state.
///
/// The runtime is checked first, then the setup artifacts, then the `ps`
/// result. A failed or absent `ps` result counts as not running.
#[must_use]
pub fn determine(obs: &Observation) -> LifecycleState {
    if !obs.runtime_running {
        return LifecycleState::RuntimeUnavailable;
    }
    if !obs.is_configured() {
        return LifecycleState::NotConfigured;
    }
    if obs.app_running == Some(true) {
        LifecycleState::Running
    } else {
        LifecycleState::ConfiguredNotRunning
    }
}

/// A step performed by a lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The environment file (and compose file, during setup) was written.
    SaveConfig,
    Compose(ComposeStep),
}

impl Step {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SaveConfig => "save",
            Self::Compose(step) => step.stage(),
        }
    }
}

/// Classification of a completed lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Success {
        steps: Vec<Step>,
    },
    /// An earlier step succeeded and its effect persists; retrying only
    /// needs to repeat `failed`.
    PartialFailure {
        completed: Vec<Step>,
        failed: ComposeStep,
        output: String,
    },
    /// The failed step aborted the run. Nothing after it was attempted.
    Fatal {
        completed: Vec<Step>,
        failed: ComposeStep,
        output: String,
    },
}

impl DeployOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success { .. } => OutcomeKind::Success,
            Self::PartialFailure { .. } => OutcomeKind::PartialFailure,
            Self::Fatal { .. } => OutcomeKind::Fatal,
        }
    }

    #[must_use]
    pub fn completed(&self) -> &[Step] {
        match self {
            Self::Success { steps } => steps,
            Self::PartialFailure { completed, .. } | Self::Fatal { completed, .. } => completed,
        }
    }

    /// The step that failed, if any.
    #[must_use]
    pub fn failed_step(&self) -> Option<ComposeStep> {
        match self {
            Self::Success { .. } => None,
            Self::PartialFailure { failed, .. } | Self::Fatal { failed, .. } => Some(*failed),
        }
    }

    /// Convert a failure into the matching [`DeployError`].
    ///
    /// # Errors
    ///
    /// `Fatal` becomes `CommandFailed` and `PartialFailure` becomes
    /// `PartialFailure`.
    pub fn into_result(self) -> Result<Vec<Step>, DeployError> {
        match self {
            Self::Success { steps } => Ok(steps),
            Self::PartialFailure { failed, output, .. } => Err(DeployError::PartialFailure {
                stage: failed.stage().to_string(),
                subcommand: failed.to_string(),
                output,
            }),
            Self::Fatal { failed, output, .. } => Err(DeployError::CommandFailed {
                subcommand: failed.to_string(),
                output,
            }),
        }
    }

    /// Serializable form for `--json` output.
    #[must_use]
    pub fn to_output(&self, operation: &str) -> OutcomeOutput {
        let (subcommand, output) = match self {
            Self::Success { .. } => (None, None),
            Self::PartialFailure { failed, output, .. } | Self::Fatal { failed, output, .. } => {
                (Some(failed.to_string()), Some(output.clone()))
            }
        };
        OutcomeOutput {
            operation: operation.to_string(),
            outcome: self.kind(),
            completed_steps: self.completed().iter().map(|s| s.name().to_string()).collect(),
            failed_step: self.failed_step().map(|s| s.stage().to_string()),
            subcommand,
            output,
        }
    }
}
