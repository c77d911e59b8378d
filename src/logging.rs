// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TALLY_LOG=debug`.
pub const LOG_ENV: &str = "TALLY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber. Standard output carries only the report.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };
    // try_init: a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
