use super::run_all;
use crate::model::{FileFacts, ParentEvidence, StatOutcome};
use crate::policy::{AgeLimit, EffectiveRule, SizeBound};
use crate::test_support::{
    checked, facts_with_content, found, found_with_mtime, rule_with_blacklist, rule_with_max,
    rule_with_max_lines, rule_with_min,
};
use filegate_types::{ids, Finding, RelPath, Severity};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const NOW: OffsetDateTime = datetime!(2026-01-02 00:00:00 UTC);

fn run(file: crate::model::CheckedFile) -> Vec<Finding> {
    let mut out = Vec::new();
    run_all(&file, NOW, &mut out);
    out
}

fn errors(findings: &[Finding]) -> Vec<&str> {
    findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .map(|f| f.code.as_str())
        .collect()
}

// ---------------------------------------------------------------------------
// size
// ---------------------------------------------------------------------------

#[test]
fn size_noop_without_bounds() {
    let out = run(checked("a.css", EffectiveRule::default(), found(50)));
    assert!(out.is_empty());
}

#[test]
fn bigger_than_is_wired_as_the_minimum_bound() {
    // bigger_than: 100 against a 50 byte file reads like a maximum, but the
    // observed wiring treats it as the minimum.
    let out = run(checked("a.css", rule_with_min(SizeBound::Bytes(100)), found(50)));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_TOO_SMALL);
    assert_eq!(out[0].message, "too small! 50 < 100");
}

#[test]
fn default_css_minimum_flags_stub_files() {
    let out = run(checked("a.css", rule_with_min(SizeBound::Bytes(10)), found(5)));
    assert_eq!(errors(&out), vec![ids::CODE_TOO_SMALL]);
}

#[test]
fn less_than_is_wired_as_the_maximum_bound() {
    let out = run(checked("a.css", rule_with_max(SizeBound::Bytes(100)), found(150)));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_TOO_BIG);
    assert_eq!(out[0].message, "too big! 150 > 100");
}

#[test]
fn size_within_bounds_is_silent() {
    let rule = EffectiveRule {
        less_than: Some(SizeBound::Bytes(100)),
        bigger_than: Some(SizeBound::Bytes(10)),
        ..EffectiveRule::default()
    };
    let out = run(checked("a.css", rule, found(50)));
    assert!(out.is_empty());
}

#[test]
fn min_violation_wins_over_max() {
    // Contradictory bounds: the minimum check runs first and returns.
    let rule = EffectiveRule {
        less_than: Some(SizeBound::Bytes(10)),
        bigger_than: Some(SizeBound::Bytes(100)),
        ..EffectiveRule::default()
    };
    let out = run(checked("a.css", rule, found(50)));
    assert_eq!(errors(&out), vec![ids::CODE_TOO_SMALL]);
}

#[test]
fn parent_same_as_file_warns_without_failing() {
    let evidence = StatOutcome::Found(FileFacts {
        parent: Some(ParentEvidence::SameAsFile),
        ..FileFacts::sized(50)
    });
    let out = run(checked("app.css", rule_with_max(SizeBound::Parent), evidence));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[0].code, ids::CODE_PARENT_IS_SELF);
}

#[test]
fn missing_parent_warns_without_failing() {
    let evidence = StatOutcome::Found(FileFacts {
        parent: Some(ParentEvidence::Missing {
            parent: RelPath::new("app.css"),
        }),
        ..FileFacts::sized(50)
    });
    let out = run(checked("_app.css", rule_with_max(SizeBound::Parent), evidence));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[0].code, ids::CODE_PARENT_MISSING);
    assert!(out[0].message.contains("app.css"));
}

#[test]
fn parent_bound_compares_against_parent_size() {
    let evidence = StatOutcome::Found(FileFacts {
        parent: Some(ParentEvidence::Found {
            parent: RelPath::new("app.css"),
            size: 100,
        }),
        ..FileFacts::sized(150)
    });
    let out = run(checked("_app.css", rule_with_max(SizeBound::Parent), evidence));
    assert_eq!(errors(&out), vec![ids::CODE_TOO_BIG]);
    assert_eq!(out[0].message, "too big! 150 > 100 (app.css)");
}

#[test]
fn numeric_min_also_activates_parent_comparison() {
    // max is the parent token, min a byte count. The byte minimum passes,
    // but once the parent branch is entered any set min bound compares
    // against the parent size too.
    let rule = EffectiveRule {
        less_than: Some(SizeBound::Parent),
        bigger_than: Some(SizeBound::Bytes(5)),
        ..EffectiveRule::default()
    };
    let evidence = StatOutcome::Found(FileFacts {
        parent: Some(ParentEvidence::Found {
            parent: RelPath::new("app.css"),
            size: 100,
        }),
        ..FileFacts::sized(50)
    });
    let out = run(checked("_app.css", rule, evidence));
    assert_eq!(errors(&out), vec![ids::CODE_TOO_SMALL]);
    assert_eq!(out[0].message, "too small! 50 < 100 (app.css)");
}

#[test]
fn numeric_failure_suppresses_parent_branch() {
    let rule = EffectiveRule {
        less_than: Some(SizeBound::Parent),
        bigger_than: Some(SizeBound::Bytes(100)),
        ..EffectiveRule::default()
    };
    let evidence = StatOutcome::Found(FileFacts {
        parent: Some(ParentEvidence::Found {
            parent: RelPath::new("app.css"),
            size: 10,
        }),
        ..FileFacts::sized(50)
    });
    let out = run(checked("_app.css", rule, evidence));
    // Only the numeric "too small" fires; the parent comparison never runs.
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_TOO_SMALL);
    assert_eq!(out[0].message, "too small! 50 < 100");
}

// ---------------------------------------------------------------------------
// age
// ---------------------------------------------------------------------------

fn rule_with_max_age(limit: AgeLimit) -> EffectiveRule {
    EffectiveRule {
        max_age: Some(limit),
        ..EffectiveRule::default()
    }
}

#[test]
fn stale_file_is_obsolete() {
    let mtime = NOW - Duration::seconds(10);
    let out = run(checked(
        "a.css",
        rule_with_max_age(AgeLimit::Seconds(5.0)),
        found_with_mtime(50, mtime),
    ));
    assert_eq!(errors(&out), vec![ids::CODE_OBSOLETE]);
    assert!(out[0].message.starts_with("obsolete!"));
}

#[test]
fn fresh_file_passes_age_check() {
    let mtime = NOW - Duration::seconds(1);
    let out = run(checked(
        "a.css",
        rule_with_max_age(AgeLimit::Seconds(5.0)),
        found_with_mtime(50, mtime),
    ));
    assert!(out.is_empty());
}

#[test]
fn future_mtime_warns_without_failing() {
    let mtime = NOW + Duration::seconds(30);
    let out = run(checked(
        "a.css",
        rule_with_max_age(AgeLimit::Seconds(5.0)),
        found_with_mtime(50, mtime),
    ));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[0].code, ids::CODE_FUTURE_MTIME);
    assert!(out[0].message.contains("in future"));
}

#[test]
fn malformed_max_age_warns_without_failing() {
    let out = run(checked(
        "a.css",
        rule_with_max_age(AgeLimit::Malformed("\"soon\"".to_string())),
        found_with_mtime(50, NOW - Duration::seconds(1_000_000)),
    ));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[0].code, ids::CODE_MALFORMED_MAX_AGE);
    assert!(out[0].message.contains("strange param max_age"));
}

// ---------------------------------------------------------------------------
// max lines
// ---------------------------------------------------------------------------

#[test]
fn newline_count_over_limit_fails() {
    let evidence = StatOutcome::Found(facts_with_content(6, "a\nb\nc\n"));
    let out = run(checked("_a.js", rule_with_max_lines(2), evidence));
    assert_eq!(errors(&out), vec![ids::CODE_TOO_MANY_NEWLINES]);
    assert_eq!(out[0].message, "too much newlines! 3 > 2");
}

#[test]
fn newline_count_at_limit_passes() {
    let evidence = StatOutcome::Found(facts_with_content(6, "a\nb\nc\n"));
    let out = run(checked("_a.js", rule_with_max_lines(3), evidence));
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// blacklist
// ---------------------------------------------------------------------------

#[test]
fn blacklist_match_reports_every_occurrence() {
    let content = "@import 'a.css';\nbody {}\n@import 'b.css';\n";
    let evidence = StatOutcome::Found(facts_with_content(content.len() as u64, content));
    let out = run(checked("page.css", rule_with_blacklist("@import"), evidence));
    assert_eq!(errors(&out), vec![ids::CODE_BLACKLIST_MATCH]);
    assert_eq!(out[0].data["matches"], 2);
    assert!(out[0].message.contains("@import @import"));
}

#[test]
fn blacklist_without_match_is_silent() {
    let evidence = StatOutcome::Found(facts_with_content(8, "body {}\n"));
    let out = run(checked("page.css", rule_with_blacklist("@import"), evidence));
    assert!(out.is_empty());
}

#[test]
fn blacklist_excerpt_is_truncated() {
    let content = "x".repeat(300);
    let evidence = StatOutcome::Found(facts_with_content(300, content.as_str()));
    let out = run(checked("page.css", rule_with_blacklist("x+"), evidence));
    assert_eq!(out.len(), 1);
    // 140 chars of matched text plus the surrounding message.
    assert!(out[0].message.contains(&format!("\"{}...\"", "x".repeat(140))));
}

// ---------------------------------------------------------------------------
// access and dispatch
// ---------------------------------------------------------------------------

#[test]
fn missing_file_reports_not_found_only() {
    let out = run(checked(
        "gone.css",
        rule_with_min(SizeBound::Bytes(10)),
        StatOutcome::Missing,
    ));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_NOT_FOUND);
    assert_eq!(out[0].message, "File not found");
}

#[test]
fn stat_failure_reports_the_underlying_error() {
    let out = run(checked(
        "locked.css",
        EffectiveRule::default(),
        StatOutcome::Failed("permission denied".to_string()),
    ));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_STAT_FAILED);
    assert!(out[0].message.contains("permission denied"));
}

#[test]
fn read_failure_fails_and_skips_content_checks() {
    let rule = EffectiveRule {
        max_new_lines: Some(2),
        ..rule_with_blacklist("@import")
    };
    let evidence = StatOutcome::Found(FileFacts {
        content: Some(Err("invalid utf-8".to_string())),
        ..FileFacts::sized(50)
    });
    let out = run(checked("page.css", rule, evidence));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_READ_FAILED);
}

#[test]
fn all_violations_are_reported_in_one_pass() {
    let rule = EffectiveRule {
        less_than: Some(SizeBound::Bytes(10)),
        max_age: Some(AgeLimit::Seconds(5.0)),
        max_new_lines: Some(1),
        ..rule_with_blacklist("@import")
    };
    let content = "@import 'a.css';\n\n\n";
    let evidence = StatOutcome::Found(FileFacts {
        mtime: Some(NOW - Duration::seconds(60)),
        content: Some(Ok(content.to_string())),
        ..FileFacts::sized(100)
    });
    let out = run(checked("page.css", rule, evidence));
    assert_eq!(
        errors(&out),
        vec![
            ids::CODE_TOO_BIG,
            ids::CODE_OBSOLETE,
            ids::CODE_TOO_MANY_NEWLINES,
            ids::CODE_BLACKLIST_MATCH,
        ]
    );
}
