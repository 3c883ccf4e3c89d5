use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::stderr_buffer::BufferedStderr;

/// Map `-v` count to a filter. `RUST_LOG` wins when no flag is given.
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber. Output goes to stderr, or to the stderr
/// buffer while the TUI is running.
pub fn init(verbose: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(|| BufferedStderr)
        .try_init();

    if let Err(e) = result {
        // Already installed (tests, embedding); keep the existing one
        eprintln!("logging not initialised: {}", e);
    }
}
