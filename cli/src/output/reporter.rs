//! Presentation-layer implementations of `ProgressReporter`.
//!
//! `TerminalReporter` wraps `&OutputContext` so application services can emit
//! progress events without depending on any presentation type directly.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// On a TTY each `step()` starts a spinner that the next `success()` or
/// `warn()` finishes. Otherwise:
/// - `step()` prints `"  → {message}"`
/// - `success()` prints `"  ✓ {message}"`
/// - `warn()` prints `"  ⚠ {message}"`
///
/// All output is suppressed when `ctx.quiet`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    active: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            active: RefCell::new(None),
        }
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.active.borrow_mut().take()
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        if let Some(previous) = self.take_spinner() {
            previous.finish_and_clear();
        }
        if self.ctx.show_progress() {
            *self.active.borrow_mut() = Some(progress::spinner(message));
        } else {
            println!("  {} {message}", "→".style(self.ctx.styles.info));
        }
    }

    fn success(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        match self.take_spinner() {
            Some(pb) => progress::finish_ok(&pb, message),
            None => self.ctx.success(message),
        }
    }

    fn warn(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        match self.take_spinner() {
            Some(pb) => progress::finish_warn(&pb, message),
            None => self.ctx.warn(message),
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        if let Some(pb) = self.active.get_mut().take() {
            pb.finish_and_clear();
        }
    }
}

/// Reporter that discards every event. Used in `--json` mode so stdout
/// carries only the JSON document.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// The reporter chosen for the current output mode.
pub enum Reporter<'a> {
    Terminal(TerminalReporter<'a>),
    Silent(SilentReporter),
}

impl ProgressReporter for Reporter<'_> {
    fn step(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.step(message),
            Self::Silent(r) => r.step(message),
        }
    }

    fn success(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.success(message),
            Self::Silent(r) => r.success(message),
        }
    }

    fn warn(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.warn(message),
            Self::Silent(r) => r.warn(message),
        }
    }
}
