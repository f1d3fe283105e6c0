//! Tracing subscriber setup for the command-line tool

use crate::io::configuration::{DEFAULT_LOG_DIRECTIVE, QUIET_LOG_DIRECTIVE};
use tracing_subscriber::EnvFilter;

/// Filter directive to use when `RUST_LOG` is unset
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_DIRECTIVE
    } else {
        DEFAULT_LOG_DIRECTIVE
    }
}

/// Build the event filter, preferring `RUST_LOG` when it is set and valid
pub fn build_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)))
}

/// Install a stderr subscriber; does nothing if one is already installed
pub fn init_logging(quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
