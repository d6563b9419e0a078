//! Shared source-tree helpers for architecture tests.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .expect("architecture-tests lives at crates/architecture-tests")
}

/// Every `.rs` file under `crates/`, skipping build output and this crate.
#[allow(dead_code)]
pub fn crate_sources() -> Vec<PathBuf> {
    WalkDir::new(workspace_root().join("crates"))
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}
