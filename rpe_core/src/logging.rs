//! Tracing setup shared by the `rpelog` and `rpe-monitor` binaries.
//!
//! Everything is written to stderr; stdout belongs to command output.
//! `RUST_LOG` always wins over the built-in directives.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directives for the interactive CLI
pub const CLI_FILTER: &str = "warn";

/// Directives for the monitor; surfaces per-request spans from tower-http
pub const MONITOR_FILTER: &str = "info,tower_http=debug";

/// Initialize logging with fallback filter directives
pub fn init_with_filter(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for tests (captured per test, debug level)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
