//! Diagnostic logging setup.
//!
//! Logs go to stderr so `--json` stdout stays machine-readable. User-facing
//! progress goes through `ProgressReporter`, not through tracing.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `postiz_cli=debug`.
pub const LOG_ENV: &str = "POSTIZ_LOG";

/// Build the filter: `POSTIZ_LOG` when set and valid, otherwise `warn`
/// (`debug` with `--verbose`).
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_level(true),
        )
        .try_init();
}
