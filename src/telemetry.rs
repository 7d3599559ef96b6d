//! Logging setup for the command line tool.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Install a console subscriber writing to stderr, so stdout only carries the report. `RUST_LOG` takes precedence
/// over `level`. Colors are only emitted when stderr is a terminal.
///
/// Call this once at startup, before any `tracing` events are emitted.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}
