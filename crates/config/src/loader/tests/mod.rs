//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and their precedence over env and profile values.
//! - Test profile loading from files.
//! - Test environment variable handling.
//! - Test dotenv gating and error redaction.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `env_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
