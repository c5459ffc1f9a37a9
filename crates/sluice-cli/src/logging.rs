//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// Events go to stderr so report lines on stdout stay clean. The default
/// level is warn, raised to debug by `--verbose`; `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "sluice=debug" } else { "sluice=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
