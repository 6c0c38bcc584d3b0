//! Infrastructure implementation of the `RuntimeProbe` port.

use std::time::Duration;

use tracing::debug;

use crate::application::ports::{CommandRunner, RuntimeProbe};

/// Probes the container runtime through its own CLI.
///
/// `--version` answers whether the CLI is installed; `info` needs the daemon
/// and answers whether it is running.
pub struct DockerRuntimeProbe<R> {
    runner: R,
    program: String,
    timeout: Duration,
}

impl<R: CommandRunner> DockerRuntimeProbe<R> {
    pub fn new(runner: R, program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            runner,
            program: program.into(),
            timeout,
        }
    }

    async fn succeeds(&self, args: &[&str]) -> bool {
        match self
            .runner
            .run_with_timeout(&self.program, args, self.timeout)
            .await
        {
            Ok(output) => {
                let ok = output.status.success();
                debug!(program = %self.program, ?args, ok, "runtime probe");
                ok
            }
            Err(e) => {
                debug!(program = %self.program, ?args, error = %e, "runtime probe failed");
                false
            }
        }
    }
}

impl<R: CommandRunner> RuntimeProbe for DockerRuntimeProbe<R> {
    async fn is_installed(&self) -> bool {
        self.succeeds(&["--version"]).await
    }

    async fn is_running(&self) -> bool {
        self.succeeds(&["info"]).await
    }
}
