// src/logging.rs
//! Tracing subscriber setup for binaries and services embedding po-helper
//!
//! Only compiled with the `logging` feature.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber; `RUST_LOG` wins over `diagnostics.filter`
///
/// Idempotent, safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&crate::config::load().diagnostics.filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}

/// Same as [`init`] but writes through the test harness capture
pub fn init_for_tests() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}
