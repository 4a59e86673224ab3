//! Tracing setup
//!
//! Logs go to stderr so stdout only ever holds the result line.

use std::io;

use tracing::level_filters::LevelFilter;

/// Level implied by the `-v` count and `--quiet`.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_tracing(level: LevelFilter) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
