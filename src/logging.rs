//! Process-wide `tracing` subscriber.
//!
//! Log lines go to stderr so they never mix with transform output or
//! reports on stdout. `GOLDCASE_LOG` takes an `EnvFilter` directive and
//! overrides the verbosity flag.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GOLDCASE_LOG";

/// Maps the CLI `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the fmt subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
