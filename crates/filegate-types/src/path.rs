use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical base-relative path used for rule keys and findings.
///
/// Rule keys are resolved against the run's base directory before any
/// filesystem access; findings and log lines always carry this relative form.
/// Normalization is simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - never empty (an empty input becomes `.`)
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RelPath(String);

impl Default for RelPath {
    fn default() -> Self {
        RelPath::new(".")
    }
}

impl RelPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path segment, used for default-rule derivation.
    pub fn file_name(&self) -> &str {
        Utf8Path::new(&self.0).file_name().unwrap_or(&self.0)
    }

    /// Absolute (or base-joined) location of this file for filesystem access.
    pub fn resolve_in(&self, base_dir: &Utf8Path) -> Utf8PathBuf {
        base_dir.join(&self.0)
    }
}

impl From<&Utf8Path> for RelPath {
    fn from(value: &Utf8Path) -> Self {
        RelPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RelPath {
    fn from(value: Utf8PathBuf) -> Self {
        RelPath::new(value.as_str())
    }
}

impl std::fmt::Display for RelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
