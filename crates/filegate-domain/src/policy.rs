use filegate_types::RelPath;
use regex::Regex;

/// A size bound: an absolute byte count, or the size of the file's parent
/// variant (resolved and statted by the inspect layer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeBound {
    Bytes(u64),
    Parent,
}

/// Maximum allowed age. A malformed parameter is carried through so the
/// check can warn about it per file instead of failing resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum AgeLimit {
    Seconds(f64),
    Malformed(String),
}

/// A compiled blacklist pattern plus its source for messages.
#[derive(Clone, Debug)]
pub struct BlacklistRule {
    pub source: String,
    pub regex: Regex,
}

/// The merged, typed rule the checks evaluate for one file.
///
/// Field naming is kept from the configuration surface: `less_than` acts as
/// the maximum size bound and `bigger_than` as the minimum one. The size
/// check preserves that wiring as observed behavior.
#[derive(Clone, Debug, Default)]
pub struct EffectiveRule {
    pub less_than: Option<SizeBound>,
    pub bigger_than: Option<SizeBound>,
    pub max_age: Option<AgeLimit>,
    pub max_new_lines: Option<u64>,
    pub blacklist: Option<BlacklistRule>,
}

impl EffectiveRule {
    /// The line and blacklist checks need the file contents.
    pub fn needs_content(&self) -> bool {
        self.max_new_lines.is_some() || self.blacklist.is_some()
    }

    /// Either bound compares against the parent variant's size.
    pub fn needs_parent(&self) -> bool {
        matches!(self.less_than, Some(SizeBound::Parent))
            || matches!(self.bigger_than, Some(SizeBound::Parent))
    }
}

/// The resolved per-file rules for one run.
#[derive(Clone, Debug, Default)]
pub struct CheckPlan {
    /// Environment tag the rules were resolved for.
    pub env: String,
    /// Files named in the rule list, before applicability filtering.
    pub files_listed: u32,
    pub entries: Vec<PlanEntry>,
}

#[derive(Clone, Debug)]
pub struct PlanEntry {
    pub path: RelPath,
    pub rule: EffectiveRule,
}
