//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use postiz_common::{ProviderStatus, StatusOutput};
use serde::Serialize;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::{Reporter, SilentReporter, TerminalReporter};
pub use styles::Styles;

use crate::domain::lifecycle::DeployOutcome;
use crate::domain::settings::PostizSettings;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Dispatches rendering to the human or JSON form.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_status(&self, status: &StatusOutput) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_status(status);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(status),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_outcome(&self, operation: &str, outcome: &DeployOutcome, app_url: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_outcome(operation, outcome, app_url);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&outcome.to_output(operation)),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_providers(&self, providers: &[ProviderStatus]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_providers(providers);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(providers),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_env(&self, path: &Path, entries: &[(String, String)]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_env(path, entries);
                Ok(())
            }
            Self::Json(_) => {
                let map: serde_json::Map<String, serde_json::Value> = entries
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect();
                JsonRenderer::print(&map)
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_settings(&self, settings: &PostizSettings, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_settings(settings, path);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&SettingsView { path, settings }),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_shortcut(&self, installer: &str, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_shortcut(installer, path);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({
                "installer": installer,
                "path": path,
            })),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({ "version": version })),
        }
    }
}

#[derive(Serialize)]
struct SettingsView<'a> {
    path: &'a Path,
    settings: &'a PostizSettings,
}
