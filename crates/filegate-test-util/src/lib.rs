//! Shared test utilities for the filegate workspace.
//!
//! Fixture trees are written into UTF-8 temp roots; report JSON is
//! normalized so two runs of the same fixture compare equal.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// A fresh temp directory as a UTF-8 path (panics on non-UTF-8 temp roots,
/// which do not occur on supported CI hosts).
pub fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 temp path")
}

/// Write a fixture file, creating parent directories as needed.
pub fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture parent");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

/// Normalize non-deterministic report fields for golden comparison:
/// `tool.version` and the run timestamps are replaced with placeholders.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        if let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
        for key in ["started_at", "finished_at"] {
            if obj.contains_key(key) {
                obj.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
            }
        }
    }
    value
}
