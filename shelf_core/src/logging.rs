//! # Logging
//!
//! The engine emits `tracing` events (placements at `debug`, search summaries
//! at `debug`, materialization at `info`). Nothing is printed unless the
//! host installs a subscriber; these helpers install a `tracing-subscriber`
//! formatter for binaries and tests.
//!
//! ## Environment
//!
//! - `RUST_LOG`: filter directive (default: `info`), e.g. `RUST_LOG=debug`
//!   or `RUST_LOG=shelf_core=debug`
//!
//! ## Example
//!
//! ```rust,no_run
//! shelf_core::logging::init();
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Does nothing if one is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Verbose subscriber that writes through the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
