use crate::policy::EffectiveRule;
use filegate_types::RelPath;
use time::OffsetDateTime;

/// What the inspect layer learned when statting one planned file.
#[derive(Clone, Debug)]
pub enum StatOutcome {
    /// The path does not exist (ENOENT class).
    Missing,
    /// Any other stat failure, with the underlying error text.
    Failed(String),
    Found(FileFacts),
}

#[derive(Clone, Debug)]
pub struct FileFacts {
    pub size: u64,
    pub mtime: Option<OffsetDateTime>,

    /// Present when the rule required content; `Err` carries the read error.
    pub content: Option<Result<String, String>>,

    /// Present when a size bound compares against the parent variant.
    pub parent: Option<ParentEvidence>,
}

impl FileFacts {
    pub fn sized(size: u64) -> Self {
        FileFacts {
            size,
            mtime: None,
            content: None,
            parent: None,
        }
    }
}

/// Outcome of resolving and probing the parent variant of a file.
#[derive(Clone, Debug)]
pub enum ParentEvidence {
    /// Neither derivation applied; the parent would be the file itself.
    SameAsFile,
    Missing { parent: RelPath },
    Found { parent: RelPath, size: u64 },
}

/// One planned file with its gathered evidence, ready for evaluation.
#[derive(Clone, Debug)]
pub struct CheckedFile {
    pub path: RelPath,
    pub rule: EffectiveRule,
    pub evidence: StatOutcome,
}
