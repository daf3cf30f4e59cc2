//! Log output for the command line tool.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// The log level used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// Events go to stderr so that reports and exported CSV on stdout stay
/// clean. The level is read from `RUST_LOG`, e.g. `RUST_LOG=debug`.
///
/// Must be called at most once per process.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .init();
}
