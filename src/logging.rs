use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. Stdout stays reserved for the
/// counter output, so everything tracing emits goes to stderr, filtered by
/// `RUST_LOG` and silent below `warn` by default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
