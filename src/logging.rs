// Tracing subscriber setup shared by the CLI and the server.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_FILTER: &str = "receipt_points=info,receipt_server=info,tower_http=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Safe to call more than once; later calls are no-ops.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
