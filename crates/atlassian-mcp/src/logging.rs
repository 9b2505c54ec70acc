//! Stderr logging for the adapter binaries.
//!
//! Stdout carries the MCP framing, so every log line goes to stderr. The
//! filter comes from `RUST_LOG` when set, otherwise from the binary's
//! default directive. Events on [`STARTUP_TARGET`] pass at `info` whatever
//! the filter says.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Target of the startup announcement.
pub const STARTUP_TARGET: &str = "atlassian_mcp::startup";

/// Build the subscriber filter: `RUST_LOG` or `default_filter`, plus the
/// startup target at `info`.
pub fn filter(default_filter: &str) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    match format!("{STARTUP_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
