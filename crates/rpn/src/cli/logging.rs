//! Diagnostic logging for the `rpn` binary.

use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "RPN_LOG";

/// Filter used when `RPN_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber so logs never mix with command output.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be set when embedded in tests.
    let _ignored = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
