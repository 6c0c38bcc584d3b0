//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill on all platforms.

use std::path::Path;
use std::process::{Output, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`. Uses tokio for async process execution
/// with guaranteed timeout and kill on all platforms.
///
/// On Windows, `tokio::time::timeout` around `.output().await` does NOT kill
/// the child process when the timeout fires: the future is dropped but the
/// OS process keeps running. This implementation uses `tokio::select!` with
/// explicit `child.kill()` to guarantee the process is terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn execute(
        mut command: tokio::process::Command,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        debug!(program, ?args, timeout_secs = timeout.as_secs(), "spawning process");
        let started = Instant::now();
        let mut child = command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                let status = status.with_context(|| format!("waiting for {program}"))?;
                debug!(
                    program,
                    exit_code = status.code(),
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "process exited"
                );
                Ok(Output { status, stdout, stderr })
            } => result,
            () = tokio::time::sleep(timeout) => {
                warn!(program, ?args, timeout_secs = timeout.as_secs(), "process timed out; killing");
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
            }
        }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        Self::execute(tokio::process::Command::new(program), program, args, timeout).await
    }

    async fn run_in_dir(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
        timeout: Duration,
    ) -> Result<Output> {
        let mut command = tokio::process::Command::new(program);
        command.current_dir(dir);
        Self::execute(command, program, args, timeout).await
    }
}
