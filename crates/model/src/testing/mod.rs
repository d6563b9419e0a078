//! Testing utilities for model tests.
//!
//! Helpers for loading recorded service payloads from the `fixtures/`
//! directory. Available when running tests or when the `test-utils` feature
//! is enabled.
//!
//! # Example
//! ```ignore
//! use transcribe_model::testing::load_fixture;
//!
//! let body = load_fixture("transcription_jobs/get_completed.json");
//! ```

use std::path::{Path, PathBuf};

fn resolve(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let bytes = load_fixture_bytes(fixture_path);
    serde_json::from_slice(&bytes).expect("Invalid JSON in fixture")
}

/// Load a fixture file's raw bytes, as a response body would arrive.
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_fixture_bytes(fixture_path: &str) -> Vec<u8> {
    let full_path = resolve(fixture_path);
    std::fs::read(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
