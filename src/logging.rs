//! Diagnostic logging
//!
//! Log lines go to stderr so they never mix with command output (including
//! NDJSON on stdout). `RUST_LOG` wins over the CLI verbosity.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Effective verbosity from `-v` count and the configured level.
///
/// Without `-v` the configured level applies as is, including `quiet`.
/// Each `-v` can only raise it.
pub fn effective_verbosity(cli_verbose: u8, configured: Verbosity) -> Verbosity {
    let from_cli = match cli_verbose {
        0 => return configured,
        1 => Verbosity::Verbose,
        _ => Verbosity::Debug,
    };
    from_cli.max(configured)
}

/// Default directive for our own crate at the given verbosity.
pub fn default_directive(verbosity: Verbosity, cli_verbose: u8) -> String {
    let level = match verbosity {
        Verbosity::Quiet => Level::ERROR,
        Verbosity::Normal => Level::WARN,
        Verbosity::Verbose => Level::INFO,
        Verbosity::Debug if cli_verbose >= 3 => Level::TRACE,
        Verbosity::Debug => Level::DEBUG,
    };
    format!("opener={}", level.to_string().to_lowercase())
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: Verbosity, cli_verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, cli_verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
