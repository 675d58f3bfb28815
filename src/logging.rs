//! Diagnostic logging setup.
//!
//! Logs always go to stderr: stdout carries the report (or the MCP protocol
//! when running `serve`).

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive, e.g. `dowser=trace`.
pub const LOG_ENV: &str = "DOWSER_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let ansi = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
