use crate::model::{CheckedFile, FileFacts, StatOutcome};
use crate::policy::{BlacklistRule, EffectiveRule, SizeBound};
use filegate_types::RelPath;
use regex::Regex;
use time::OffsetDateTime;

pub fn checked(path: &str, rule: EffectiveRule, evidence: StatOutcome) -> CheckedFile {
    CheckedFile {
        path: RelPath::new(path),
        rule,
        evidence,
    }
}

pub fn found(size: u64) -> StatOutcome {
    StatOutcome::Found(FileFacts::sized(size))
}

pub fn found_with_mtime(size: u64, mtime: OffsetDateTime) -> StatOutcome {
    StatOutcome::Found(FileFacts {
        mtime: Some(mtime),
        ..FileFacts::sized(size)
    })
}

pub fn facts_with_content(size: u64, content: &str) -> FileFacts {
    FileFacts {
        content: Some(Ok(content.to_string())),
        ..FileFacts::sized(size)
    }
}

pub fn rule_with_max(bound: SizeBound) -> EffectiveRule {
    EffectiveRule {
        less_than: Some(bound),
        ..EffectiveRule::default()
    }
}

pub fn rule_with_min(bound: SizeBound) -> EffectiveRule {
    EffectiveRule {
        bigger_than: Some(bound),
        ..EffectiveRule::default()
    }
}

pub fn rule_with_blacklist(source: &str) -> EffectiveRule {
    EffectiveRule {
        blacklist: Some(BlacklistRule {
            source: source.to_string(),
            regex: Regex::new(source).expect("test pattern compiles"),
        }),
        ..EffectiveRule::default()
    }
}

pub fn rule_with_max_lines(limit: u64) -> EffectiveRule {
    EffectiveRule {
        max_new_lines: Some(limit),
        ..EffectiveRule::default()
    }
}
