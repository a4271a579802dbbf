// tests/common.rs
//! Shared test utilities for logging setup

/// Initialize test-friendly logging (respects `RUST_LOG=`)
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    po_helper::logging::init_for_tests();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}
