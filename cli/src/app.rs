//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is built once per invocation from the global flags and the
//! effective settings, and owns the production adapters every command uses.

use anyhow::Result;

use crate::application::ports::SettingsStore;
use crate::application::services::orchestrator::Orchestrator;
use crate::domain::settings::PostizSettings;
use crate::domain::target::DeploymentTarget;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::compose::DockerCompose;
use crate::infra::env_store::EnvFileStore;
use crate::infra::fs::LocalFs;
use crate::infra::runtime::DockerRuntimeProbe;
use crate::infra::settings::{YamlSettingsStore, apply_env_overrides, home_dir};
use crate::output::{
    HumanRenderer, JsonRenderer, OutputContext, Renderer, Reporter, SilentReporter,
    TerminalReporter,
};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `POSTIZ_YES` env vars).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    pub output: OutputFlags,
    pub behaviour: BehaviourFlags,
}

pub type AppOrchestrator<'a> = Orchestrator<
    'a,
    DockerRuntimeProbe<TokioCommandRunner>,
    DockerCompose<TokioCommandRunner>,
    EnvFileStore,
    LocalFs,
>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    pub settings_store: YamlSettingsStore,
    /// Settings after environment overrides.
    pub settings: PostizSettings,
    pub target: DeploymentTarget,
    pub probe: DockerRuntimeProbe<TokioCommandRunner>,
    pub compose: DockerCompose<TokioCommandRunner>,
    pub env_store: EnvFileStore,
    pub fs: LocalFs,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `POSTIZ_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or the home
    /// directory cannot be determined.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("POSTIZ_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let settings_store = YamlSettingsStore;
        let mut settings = settings_store.load()?;
        apply_env_overrides(&mut settings);
        let target = settings.target(&home_dir()?);

        let runner = TokioCommandRunner::new();
        let program = settings.runtime.program.clone();
        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            probe: DockerRuntimeProbe::new(runner, program.clone(), settings.probe_timeout()),
            compose: DockerCompose::new(
                runner,
                program,
                settings.compose_timeout(),
                settings.probe_timeout(),
            ),
            settings_store,
            settings,
            target,
            env_store: EnvFileStore,
            fs: LocalFs,
            non_interactive,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter for the current output mode.
    #[must_use]
    pub fn reporter(&self) -> Reporter<'_> {
        match self.mode {
            OutputMode::Human => Reporter::Terminal(TerminalReporter::new(&self.output)),
            OutputMode::Json => Reporter::Silent(SilentReporter),
        }
    }

    /// The orchestrator for the configured deployment target.
    #[must_use]
    pub fn orchestrator(&self) -> AppOrchestrator<'_> {
        Orchestrator::new(
            &self.probe,
            &self.compose,
            &self.env_store,
            &self.fs,
            self.target.clone(),
        )
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `POSTIZ_YES` env),
    /// returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
