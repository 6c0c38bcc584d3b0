//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;
use postiz_common::{LifecycleState, ProviderStatus, StatusOutput};

use crate::domain::compose::ComposeStep;
use crate::domain::lifecycle::{DeployOutcome, Step};
use crate::domain::settings::PostizSettings;
use crate::output::OutputContext;

const RUNTIME_DOWNLOAD_URL: &str = "https://docker.com/products/docker-desktop";

/// Operation name used for `update --full`.
pub const FULL_UPDATE: &str = "full update";

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("postiz {version}");
    }

    /// Render lifecycle state plus the next action the user can take.
    pub fn render_status(&self, status: &StatusOutput) {
        let runtime = match (status.runtime.installed, status.runtime.running) {
            (true, true) => "installed and running",
            (true, false) => "installed but not running",
            (false, _) => "not installed",
        };
        self.ctx.kv("State:     ", &status.state.to_string());
        self.ctx.kv("Runtime:   ", runtime);
        self.ctx.kv("Directory: ", &status.deployment_dir);
        self.ctx.kv("App URL:   ", &status.app_url);
        if !self.ctx.quiet {
            println!();
        }

        match status.state {
            LifecycleState::RuntimeUnavailable if !status.runtime.installed => {
                self.ctx.error("Container runtime is not installed.");
                self.ctx
                    .info(&format!("Install Docker Desktop from {RUNTIME_DOWNLOAD_URL}"));
            }
            LifecycleState::RuntimeUnavailable => {
                self.ctx.warn("Container runtime is installed but not running.");
                self.ctx.info("Start it and re-run: postiz status");
            }
            LifecycleState::NotConfigured => {
                self.ctx.warn("Postiz is not set up yet.");
                self.ctx.info("Run: postiz setup");
            }
            LifecycleState::ConfiguredNotRunning => {
                self.ctx.warn("Postiz is configured but not running.");
                self.ctx.info("Run: postiz start");
            }
            LifecycleState::Running => {
                self.ctx.success(&format!(
                    "Postiz is running at {}",
                    status.app_url.style(self.ctx.styles.link)
                ));
            }
        }
    }

    /// Render an operation outcome. Failures always show the failed step,
    /// the exact compose subcommand and the full captured output.
    pub fn render_outcome(&self, operation: &str, outcome: &DeployOutcome, app_url: &str) {
        match outcome {
            DeployOutcome::Success { steps } => {
                self.ctx.success(&format!("{operation} complete"));
                let brought_up = steps.iter().any(|s| {
                    matches!(
                        s,
                        Step::Compose(ComposeStep::Up | ComposeStep::ForceRecreate)
                    )
                });
                if brought_up {
                    self.ctx.info(&format!(
                        "Postiz is available at {}",
                        app_url.style(self.ctx.styles.link)
                    ));
                }
            }
            DeployOutcome::PartialFailure { failed, output, .. } => {
                self.render_failure(operation, *failed, output);
                eprintln!(
                    "  {} Earlier steps completed and persist. Retry only this step: {}",
                    "⚠".style(self.ctx.styles.warning),
                    retry_command(*failed).style(self.ctx.styles.bold)
                );
            }
            DeployOutcome::Fatal {
                completed,
                failed,
                output,
            } => {
                self.render_failure(operation, *failed, output);
                if stack_may_be_stopped(operation, completed) {
                    eprintln!(
                        "  {} Remaining steps were not run. The stack may be stopped; check with: postiz status",
                        "⚠".style(self.ctx.styles.warning),
                    );
                }
            }
        }
    }

    fn render_failure(&self, operation: &str, failed: ComposeStep, output: &str) {
        self.ctx
            .error(&format!("{operation} failed at step '{}'", failed.stage()));
        eprintln!("  {}  {failed}", "Command:".style(self.ctx.styles.dim));
        eprintln!("  {}", "Output:".style(self.ctx.styles.dim));
        let output = output.trim_end();
        if output.is_empty() {
            eprintln!("    (no output)");
        }
        for line in output.lines() {
            eprintln!("    {line}");
        }
    }

    /// Render the provider catalog with configured markers.
    pub fn render_providers(&self, providers: &[ProviderStatus]) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header("Providers:");
        for p in providers {
            let marker = if p.configured {
                "✓".style(self.ctx.styles.success).to_string()
            } else {
                "·".style(self.ctx.styles.dim).to_string()
            };
            let extra = p
                .extra_label
                .as_deref()
                .map(|l| format!(" (+ {l})"))
                .unwrap_or_default();
            println!(
                "  {marker} {:<14} {}{}",
                p.name,
                p.display_name,
                extra.style(self.ctx.styles.dim)
            );
        }
    }

    /// Render env-file entries, already masked by the caller.
    pub fn render_env(&self, path: &Path, entries: &[(String, String)]) {
        if self.ctx.quiet {
            return;
        }
        if entries.is_empty() {
            self.ctx
                .warn(&format!("{} does not exist or is empty", path.display()));
            return;
        }
        self.ctx.header(&format!("{}", path.display()));
        for (key, value) in entries {
            println!("  {}={value}", key.style(self.ctx.styles.bold));
        }
    }

    /// Render CLI settings and the environment overrides that apply.
    pub fn render_settings(&self, settings: &PostizSettings, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Settings ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<24} {}", "runtime.program:", settings.runtime.program);
        println!(
            "  {:<24} {}",
            "deployment.dir:",
            if settings.deployment.dir.is_empty() {
                "(default: ~/Postiz)"
            } else {
                settings.deployment.dir.as_str()
            }
        );
        println!("  {:<24} {}", "timeouts.compose_secs:", settings.timeouts.compose_secs);
        println!("  {:<24} {}", "timeouts.probe_secs:", settings.timeouts.probe_secs);
        println!("  {:<24} {}", "app.url:", settings.app.url);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["POSTIZ_SETTINGS", "POSTIZ_HOME", "POSTIZ_RUNTIME", "POSTIZ_LOG", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Render the result of a shortcut installation.
    pub fn render_shortcut(&self, installer: &str, path: &Path) {
        self.ctx
            .success(&format!("Installed {installer} at {}", path.display()));
    }
}

/// A fatal failure skipped later steps: either earlier steps ran first, or
/// the operation is the full-cycle update whose first step stops the stack.
#[must_use]
pub fn stack_may_be_stopped(operation: &str, completed: &[Step]) -> bool {
    !completed.is_empty() || operation == FULL_UPDATE
}

/// The command that repeats only `step`.
#[must_use]
pub fn retry_command(step: ComposeStep) -> &'static str {
    match step {
        ComposeStep::Up => "postiz start",
        ComposeStep::Down => "postiz stop",
        ComposeStep::Pull => "postiz update",
        ComposeStep::ForceRecreate | ComposeStep::ListRunning => "postiz redeploy",
    }
}
