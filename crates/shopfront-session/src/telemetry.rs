//! Tracing initialization for binaries and tests.
//!
//! Filtering follows `RUST_LOG` (e.g. `RUST_LOG=shopfront_session=debug`),
//! defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Initializes the global fmt subscriber. Safe to call more than once;
/// later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
