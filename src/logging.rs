//! Log output for the CLI and native embedders.
//!
//! Filtering follows `RUST_LOG`:
//! - `RUST_LOG=debug` - every ingest, edit and export
//! - `RUST_LOG=csvedit::editor=debug` - editor operations only
//!
//! Without `RUST_LOG` only warnings (ragged rows, superseded loads) are shown.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a stderr subscriber. `verbose` lowers the default level to debug.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
