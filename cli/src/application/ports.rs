//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{ComposeStep, DeploymentTarget, EnvMap, PostizSettings};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;

    /// Same as [`CommandRunner::run_with_timeout`] with `dir` as the working
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    async fn run_in_dir(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Runtime Ports ─────────────────────────────────────────────────────────────

/// Container runtime availability. Both checks fail closed: a timeout or an
/// invocation failure reports `false`.
#[allow(async_fn_in_trait)]
pub trait RuntimeProbe {
    /// The runtime CLI is installed and answers.
    async fn is_installed(&self) -> bool;
    /// The runtime daemon is reachable.
    async fn is_running(&self) -> bool;
}

/// Result of one compose invocation. `success` reflects the exit status only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeResult {
    pub success: bool,
    /// Merged stdout and stderr.
    pub output: String,
}

impl ComposeResult {
    #[must_use]
    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// Runs compose subcommands against a deployment directory. No retries.
#[allow(async_fn_in_trait)]
pub trait ComposeExecutor {
    async fn run(&self, target: &DeploymentTarget, step: ComposeStep) -> ComposeResult;
}

// ── Storage Ports ─────────────────────────────────────────────────────────────

/// Reads and writes the environment file.
#[allow(async_fn_in_trait)]
pub trait EnvStore {
    /// Read the document at `path`. A missing file yields an empty map.
    async fn read(&self, path: &Path) -> Result<EnvMap>;
    /// Replace the file at `path` with the rendered document. Readers see
    /// either the old or the new content, never a partial file.
    async fn write(&self, path: &Path, vars: &EnvMap) -> Result<()>;
}

/// Abstracts the local filesystem operations the orchestrator needs.
#[allow(async_fn_in_trait)]
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    async fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Replace a file's contents atomically.
    async fn write_atomic(&self, path: &Path, content: String) -> Result<()>;
}

/// Abstracts CLI settings persistence.
pub trait SettingsStore {
    /// Load settings, returning defaults when no file exists.
    fn load(&self) -> Result<PostizSettings>;
    fn save(&self, settings: &PostizSettings) -> Result<()>;
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Shortcut Port ─────────────────────────────────────────────────────────────

/// Installs a launcher for the `postiz` binary. Best effort: callers try
/// installers in order and keep the first that succeeds.
pub trait ShortcutInstaller {
    /// Short name shown to the user.
    fn name(&self) -> &'static str;
    /// Install a launcher for `binary` into `dir`, returning its path.
    fn install(&self, binary: &Path, dir: &Path) -> Result<PathBuf>;
}
