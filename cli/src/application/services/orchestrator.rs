//! Application service: deployment orchestration.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Every state-changing operation first takes the [`OperationGate`] for its
//! deployment directory, then reconciles against live probes before issuing
//! any compose command. Read-only queries never take the gate.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, PoisonError};
use std::time::Instant;

use anyhow::{Context, Result};
use postiz_common::RuntimeStatus;
use tracing::{debug, info, warn};

use crate::application::ports::{
    ComposeExecutor, ComposeResult, EnvStore, LocalFs, ProgressReporter, RuntimeProbe,
};
use crate::domain::compose::{APP_SERVICE, ComposeStep, lists_service, render_compose};
use crate::domain::env_file::EnvMap;
use crate::domain::error::DeployError;
use crate::domain::lifecycle::{self, DeployOutcome, LifecycleState, Observation, Step};
use crate::domain::provider::ApplyRequest;
use crate::domain::target::DeploymentTarget;

// ── Operation gate ────────────────────────────────────────────────────────────

static IN_FLIGHT: LazyLock<Mutex<HashSet<PathBuf>>> = LazyLock::new(Mutex::default);

/// Process-wide mutual exclusion for state-changing operations, keyed by
/// deployment directory. Overlapping requests are rejected, never queued.
pub struct OperationGate;

impl OperationGate {
    /// Claim `dir` for the lifetime of the returned guard.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Busy`] when another operation holds `dir`.
    pub fn try_acquire(dir: &Path) -> Result<OperationGuard, DeployError> {
        let mut held = IN_FLIGHT.lock().unwrap_or_else(PoisonError::into_inner);
        if !held.insert(dir.to_path_buf()) {
            warn!(dir = %dir.display(), "rejected overlapping operation");
            return Err(DeployError::Busy {
                target: dir.display().to_string(),
            });
        }
        Ok(OperationGuard {
            dir: dir.to_path_buf(),
        })
    }
}

/// Releases the gate on drop.
#[must_use = "the gate is released as soon as the guard is dropped"]
pub struct OperationGuard {
    dir: PathBuf,
}

impl Drop for OperationGuard {
    fn drop(&mut self) {
        IN_FLIGHT
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.dir);
    }
}

// ── Orchestrator ──────────────────────────────────────────────────────────────

/// How a failed step after earlier successes is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnFailure {
    /// Earlier steps persist; report `PartialFailure`.
    Partial,
    /// Abort the run and report `Fatal`.
    Abort,
}

/// Drives the deployment state machine for one target directory.
///
/// Construction does no I/O; callers await [`Orchestrator::determine_state`]
/// before acting on state.
pub struct Orchestrator<'a, P, C, E, F> {
    probe: &'a P,
    compose: &'a C,
    env: &'a E,
    fs: &'a F,
    target: DeploymentTarget,
}

impl<'a, P, C, E, F> Orchestrator<'a, P, C, E, F>
where
    P: RuntimeProbe,
    C: ComposeExecutor,
    E: EnvStore,
    F: LocalFs,
{
    pub fn new(probe: &'a P, compose: &'a C, env: &'a E, fs: &'a F, target: DeploymentTarget) -> Self {
        Self {
            probe,
            compose,
            env,
            fs,
            target,
        }
    }

    #[must_use]
    pub fn target(&self) -> &DeploymentTarget {
        &self.target
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Gather live facts. `ps` only runs once the runtime is up and every
    /// setup artifact exists.
    pub async fn observe(&self) -> Observation {
        let mut obs = Observation {
            runtime_running: self.probe.is_running().await,
            ..self.observe_files()
        };
        if obs.runtime_running && obs.is_configured() {
            let ps = self.compose.run(&self.target, ComposeStep::ListRunning).await;
            if ps.success {
                obs.app_running = Some(lists_service(&ps.output, APP_SERVICE));
            } else {
                debug!(output = %ps.output, "ps failed; treating app as not running");
            }
        }
        obs
    }

    /// Recompute the lifecycle state from live observation.
    pub async fn determine_state(&self) -> LifecycleState {
        let obs = self.observe().await;
        let state = lifecycle::determine(&obs);
        debug!(dir = %self.target, ?obs, %state, "determined lifecycle state");
        state
    }

    /// Lifecycle state and runtime facts from one observation. The daemon
    /// is probed once; `--version` only runs when the daemon did not answer.
    pub async fn snapshot(&self) -> (LifecycleState, RuntimeStatus) {
        let obs = self.observe().await;
        let state = lifecycle::determine(&obs);
        let installed = obs.runtime_running || self.probe.is_installed().await;
        debug!(dir = %self.target, ?obs, %state, installed, "took status snapshot");
        (
            state,
            RuntimeStatus {
                installed,
                running: obs.runtime_running,
            },
        )
    }

    pub async fn runtime_status(&self) -> RuntimeStatus {
        let installed = self.probe.is_installed().await;
        let running = installed && self.probe.is_running().await;
        RuntimeStatus { installed, running }
    }

    /// Read the current configuration document. A missing file is empty.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O faults.
    pub async fn read_config(&self) -> Result<EnvMap> {
        self.env.read(&self.target.env_path()).await
    }

    // ── Operations ────────────────────────────────────────────────────────────

    /// First-run setup: create the directory layout, write the env file
    /// (keeping any existing values) and the compose file, then `up -d`.
    ///
    /// # Errors
    ///
    /// Fails with `Busy` or `RuntimeNotAvailable` before touching disk, or
    /// with an I/O error while writing.
    pub async fn setup(&self, reporter: &impl ProgressReporter) -> Result<DeployOutcome> {
        let _guard = OperationGate::try_acquire(self.target.dir())?;
        self.require_runtime().await?;

        reporter.step(&format!("creating {}...", self.target));
        self.fs.create_dir_all(self.target.dir()).await?;
        for dir in self.target.data_dirs() {
            self.fs.create_dir_all(&dir).await?;
        }

        let env_path = self.target.env_path();
        let vars = self
            .env
            .read(&env_path)
            .await
            .with_context(|| format!("reading existing {}", env_path.display()))?;
        self.env.write(&env_path, &vars).await?;
        self.fs
            .write_atomic(&self.target.compose_path(), render_compose(self.target.dir()))
            .await?;
        reporter.success("configuration written");

        Ok(self
            .run_steps(vec![Step::SaveConfig], &[ComposeStep::Up], OnFailure::Partial, reporter)
            .await)
    }

    /// `up -d`: ConfiguredNotRunning to Running.
    ///
    /// # Errors
    ///
    /// Precondition failures only; command failures are outcome values.
    pub async fn start(&self, reporter: &impl ProgressReporter) -> Result<DeployOutcome> {
        self.single(ComposeStep::Up, reporter).await
    }

    /// `down`.
    ///
    /// # Errors
    ///
    /// Precondition failures only; command failures are outcome values.
    pub async fn stop(&self, reporter: &impl ProgressReporter) -> Result<DeployOutcome> {
        self.single(ComposeStep::Down, reporter).await
    }

    /// Repeat the last step of apply: `up -d --force-recreate`.
    ///
    /// # Errors
    ///
    /// Precondition failures only; command failures are outcome values.
    pub async fn redeploy(&self, reporter: &impl ProgressReporter) -> Result<DeployOutcome> {
        self.single(ComposeStep::ForceRecreate, reporter).await
    }

    /// Merge the edited keys, write the full document, then
    /// `up -d --force-recreate`. A recreate failure after the write is a
    /// partial failure.
    ///
    /// # Errors
    ///
    /// Precondition failures, or an I/O error while saving.
    pub async fn save_and_redeploy(
        &self,
        request: &ApplyRequest,
        reporter: &impl ProgressReporter,
    ) -> Result<DeployOutcome> {
        let _guard = OperationGate::try_acquire(self.target.dir())?;
        self.require_configured().await?;

        let env_path = self.target.env_path();
        let mut vars = self.env.read(&env_path).await?;
        request.merge_into(&mut vars);
        reporter.step("saving configuration...");
        self.env.write(&env_path, &vars).await?;
        info!(keys = request.edited_keys.len(), path = %env_path.display(), "configuration saved");
        reporter.success("configuration saved");

        Ok(self
            .run_steps(
                vec![Step::SaveConfig],
                &[ComposeStep::ForceRecreate],
                OnFailure::Partial,
                reporter,
            )
            .await)
    }

    /// Safe-merge update: `pull` then `up -d --force-recreate`. A recreate
    /// failure after a successful pull is a partial failure.
    ///
    /// # Errors
    ///
    /// Precondition failures only; command failures are outcome values.
    pub async fn update(&self, reporter: &impl ProgressReporter) -> Result<DeployOutcome> {
        let _guard = OperationGate::try_acquire(self.target.dir())?;
        self.require_configured().await?;
        Ok(self
            .run_steps(
                Vec::new(),
                &[ComposeStep::Pull, ComposeStep::ForceRecreate],
                OnFailure::Partial,
                reporter,
            )
            .await)
    }

    /// Full-cycle update: `down`, `pull`, `up -d`. The first failure aborts
    /// the rest; the stack may be left stopped.
    ///
    /// # Errors
    ///
    /// Precondition failures only; command failures are outcome values.
    pub async fn full_update(&self, reporter: &impl ProgressReporter) -> Result<DeployOutcome> {
        let _guard = OperationGate::try_acquire(self.target.dir())?;
        self.require_configured().await?;
        Ok(self
            .run_steps(
                Vec::new(),
                &[ComposeStep::Down, ComposeStep::Pull, ComposeStep::Up],
                OnFailure::Abort,
                reporter,
            )
            .await)
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn observe_files(&self) -> Observation {
        Observation {
            dir_exists: self.fs.exists(self.target.dir()),
            env_exists: self.fs.exists(&self.target.env_path()),
            compose_exists: self.fs.exists(&self.target.compose_path()),
            ..Observation::default()
        }
    }

    async fn require_runtime(&self) -> Result<(), DeployError> {
        if self.probe.is_running().await {
            Ok(())
        } else {
            Err(DeployError::RuntimeNotAvailable)
        }
    }

    async fn require_configured(&self) -> Result<(), DeployError> {
        self.require_runtime().await?;
        let obs = self.observe_files();
        if obs.is_configured() {
            Ok(())
        } else {
            Err(DeployError::NotConfigured {
                dir: self.target.to_string(),
                missing: obs.missing().join(", "),
            })
        }
    }

    async fn single(
        &self,
        step: ComposeStep,
        reporter: &impl ProgressReporter,
    ) -> Result<DeployOutcome> {
        let _guard = OperationGate::try_acquire(self.target.dir())?;
        self.require_configured().await?;
        Ok(self
            .run_steps(Vec::new(), &[step], OnFailure::Abort, reporter)
            .await)
    }

    async fn run_steps(
        &self,
        mut completed: Vec<Step>,
        steps: &[ComposeStep],
        on_failure: OnFailure,
        reporter: &impl ProgressReporter,
    ) -> DeployOutcome {
        for &step in steps {
            let result = self.run_step(step, reporter).await;
            if !result.success {
                return if on_failure == OnFailure::Partial && !completed.is_empty() {
                    DeployOutcome::PartialFailure {
                        completed,
                        failed: step,
                        output: result.output,
                    }
                } else {
                    DeployOutcome::Fatal {
                        completed,
                        failed: step,
                        output: result.output,
                    }
                };
            }
            completed.push(Step::Compose(step));
        }
        DeployOutcome::Success { steps: completed }
    }

    async fn run_step(&self, step: ComposeStep, reporter: &impl ProgressReporter) -> ComposeResult {
        reporter.step(&format!("running {step}..."));
        let started = Instant::now();
        let result = self.compose.run(&self.target, step).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if result.success {
            info!(step = step.stage(), elapsed_ms, "compose step finished");
            reporter.success(&format!("{step} done"));
        } else {
            warn!(step = step.stage(), elapsed_ms, "compose step failed");
            reporter.warn(&format!("{step} failed"));
        }
        result
    }
}
