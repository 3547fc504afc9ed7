use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Ordered mapping from relative path to its candidate rule record(s).
pub type FileRules = BTreeMap<String, RuleEntry>;

/// `filegate.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Validation happens at resolve time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilegateConfigV1 {
    /// Optional schema string for tooling (`filegate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Default environment tag; a CLI override wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,

    /// Restrict the run to files matching any of these globs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,

    /// Map of relative path -> rule record(s).
    #[serde(default)]
    pub rules: FileRules,
}

/// One rule record, or an ordered sequence whose later applicable entries
/// overwrite earlier fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleEntry {
    One(RuleConfig),
    Many(Vec<RuleConfig>),
}

impl RuleEntry {
    pub fn candidates(&self) -> &[RuleConfig] {
        match self {
            RuleEntry::One(rule) => std::slice::from_ref(rule),
            RuleEntry::Many(rules) => rules,
        }
    }
}

impl From<RuleConfig> for RuleEntry {
    fn from(rule: RuleConfig) -> Self {
        RuleEntry::One(rule)
    }
}

impl From<Vec<RuleConfig>> for RuleEntry {
    fn from(rules: Vec<RuleConfig>) -> Self {
        RuleEntry::Many(rules)
    }
}

/// One configured rule record, optionally environment-scoped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Restricts the record to one environment tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,

    /// Disables the record for the environment its `env` tag names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,

    /// Upper size bound in bytes, or the `"parent"` token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<SizeBoundConfig>,

    /// Lower size bound in bytes, or the `"parent"` token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bigger_than: Option<SizeBoundConfig>,

    /// Maximum age in seconds. A non-numeric value is kept as-is and warned
    /// about per file instead of failing resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<JsonValue>,

    /// Maximum newline count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_new_lines: Option<u64>,

    /// Regular-expression source; any match in the file is a violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist: Option<String>,
}

impl RuleConfig {
    /// Whether this record applies to `env`: untagged records always apply,
    /// tagged records only to their own environment and only when not
    /// skipped.
    pub fn applies_to(&self, env: &str) -> bool {
        match self.env.as_deref() {
            None => true,
            Some(tag) => tag == env && !self.skip.unwrap_or(false),
        }
    }

    /// Overlay `other`'s constraint fields onto `self` (present fields win).
    pub fn merge_from(&mut self, other: &RuleConfig) {
        if other.less_than.is_some() {
            self.less_than = other.less_than.clone();
        }
        if other.bigger_than.is_some() {
            self.bigger_than = other.bigger_than.clone();
        }
        if other.max_age.is_some() {
            self.max_age = other.max_age.clone();
        }
        if other.max_new_lines.is_some() {
            self.max_new_lines = other.max_new_lines;
        }
        if other.blacklist.is_some() {
            self.blacklist = other.blacklist.clone();
        }
    }
}

/// A byte count or the `"parent"` token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SizeBoundConfig {
    Bytes(u64),
    Token(String),
}
