//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Transcribe data contracts.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

use std::sync::Once;

#[allow(unused_imports)]
pub use transcribe_model::testing::{load_fixture, load_fixture_bytes};

static TRACING: Once = Once::new();

/// Route `tracing` events to the test harness output.
///
/// Honors `RUST_LOG`; safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
