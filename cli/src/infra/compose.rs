//! Infrastructure implementation of the `ComposeExecutor` port.

use std::time::Duration;

use tracing::{debug, warn};

use crate::application::ports::{CommandRunner, ComposeExecutor, ComposeResult};
use crate::domain::compose::ComposeStep;
use crate::domain::target::DeploymentTarget;

/// Runs `<program> compose -f <file> <subcommand>` with the deployment
/// directory as the working directory.
///
/// Only the exit status decides success. Spawn failures and timeouts are
/// reported as unsuccessful results carrying the diagnostic.
pub struct DockerCompose<R> {
    runner: R,
    program: String,
    long_timeout: Duration,
    short_timeout: Duration,
}

impl<R: CommandRunner> DockerCompose<R> {
    /// `long_timeout` applies to `up`, `pull` and `down`; `short_timeout` to `ps`.
    pub fn new(
        runner: R,
        program: impl Into<String>,
        long_timeout: Duration,
        short_timeout: Duration,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            long_timeout,
            short_timeout,
        }
    }

    fn timeout_for(&self, step: ComposeStep) -> Duration {
        if step.is_long_running() {
            self.long_timeout
        } else {
            self.short_timeout
        }
    }
}

impl<R: CommandRunner> ComposeExecutor for DockerCompose<R> {
    async fn run(&self, target: &DeploymentTarget, step: ComposeStep) -> ComposeResult {
        let compose_file = target.compose_path();
        let compose_file = compose_file.to_string_lossy();
        let mut args = vec!["compose", "-f", compose_file.as_ref()];
        args.extend_from_slice(step.args());

        debug!(program = %self.program, ?args, dir = %target, step = step.stage(), "compose step starting");
        match self
            .runner
            .run_in_dir(&self.program, &args, target.dir(), self.timeout_for(step))
            .await
        {
            Ok(output) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr);
                if !stderr.is_empty() {
                    if !combined.is_empty() && !combined.ends_with('\n') {
                        combined.push('\n');
                    }
                    combined.push_str(&stderr);
                }
                ComposeResult {
                    success: output.status.success(),
                    output: combined,
                }
            }
            Err(e) => {
                warn!(program = %self.program, step = step.stage(), error = %e, "compose invocation failed");
                ComposeResult::failed(format!("{e:#}"))
            }
        }
    }
}
