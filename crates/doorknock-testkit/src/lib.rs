//! Test utilities for doorknock
//!
//! Shared helpers for the workspace's unit and integration tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` under the current directory
///
/// Keeps test artifacts in one gitignored place. The directory is removed
/// when the returned `TempDir` is dropped.
///
/// # Panics
///
/// Panics if the current directory is unknown or `.tmp/` cannot be created.
///
/// # Examples
///
/// ```rust
/// use doorknock_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("copy.json"), "{}").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Marketing copy as the marketing agent returns it, extra keys included.
pub fn sample_copy() -> serde_json::Value {
    serde_json::json!({
        "title": "Go Solar",
        "tagline": "Save today",
        "description": "Clean power from your own roof.",
        "benefits": ["Low cost", "Fast install"],
        "flyer_text": "Knock knock! The sun is calling.",
        "email_script": "Hi there, thanks for chatting with us today."
    })
}

/// Write `value` as pretty JSON to `dir/name` and return the path.
pub fn write_json_fixture(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Write [`sample_copy`] to `dir/copy.json`.
pub fn write_sample_copy(dir: &Path) -> PathBuf {
    write_json_fixture(dir, "copy.json", &sample_copy())
}
