//! Diagnostic logging to stderr.

use tracing::Level;

/// Map `-v` occurrences to a maximum level: warn, debug, then trace.
pub fn level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level(verbosity))
        .with_target(false)
        .without_time()
        .init();
}
