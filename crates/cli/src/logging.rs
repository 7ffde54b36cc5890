//! Tracing setup
//!
//! Logs go to stderr; stdout carries only the filtered lines.

use tracing_subscriber::EnvFilter;

/// Filter used by `--debug`
const DEBUG_FILTER: &str = "warn,filter_core=debug,cli_lib=debug,backups_filter=debug";

/// Initialize the global subscriber.
///
/// `RUST_LOG` is honoured, defaulting to `warn`. `debug` overrides both and
/// turns on this program's own debug events.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
