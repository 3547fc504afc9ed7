//! Property-based tests for the evaluation engine.
//!
//! These verify invariants around:
//! - numeric size-bound behavior against a reference predicate
//! - newline counting
//! - determinism of the overall evaluation

use crate::engine::evaluate;
use crate::model::StatOutcome;
use crate::policy::{EffectiveRule, SizeBound};
use crate::test_support::{checked, found, rule_with_max_lines};
use filegate_types::{ids, Severity};
use proptest::prelude::*;
use time::macros::datetime;

const NOW: time::OffsetDateTime = datetime!(2026-01-02 00:00:00 UTC);

fn size_codes(rule: EffectiveRule, size: u64) -> Vec<String> {
    let report = evaluate("test", 1, &[checked("a.bin", rule, found(size))], NOW);
    report.findings.iter().map(|f| f.code.clone()).collect()
}

proptest! {
    #[test]
    fn numeric_bounds_match_the_reference_predicate(
        size in 0u64..10_000,
        min in prop::option::of(1u64..10_000),
        max in prop::option::of(1u64..10_000),
    ) {
        let rule = EffectiveRule {
            less_than: max.map(SizeBound::Bytes),
            bigger_than: min.map(SizeBound::Bytes),
            ..EffectiveRule::default()
        };
        let codes = size_codes(rule, size);

        // The minimum check runs first and wins outright.
        if let Some(min) = min && size < min {
            prop_assert_eq!(&codes, &vec![ids::CODE_TOO_SMALL.to_string()]);
        } else if let Some(max) = max && size > max {
            prop_assert_eq!(&codes, &vec![ids::CODE_TOO_BIG.to_string()]);
        } else {
            prop_assert!(codes.is_empty());
        }
    }

    #[test]
    fn newline_limit_fails_iff_count_exceeds_it(
        newlines in 0usize..200,
        limit in 1u64..200,
    ) {
        let content = "\n".repeat(newlines);
        let evidence = StatOutcome::Found(crate::model::FileFacts {
            content: Some(Ok(content)),
            ..crate::model::FileFacts::sized(newlines as u64)
        });
        let report = evaluate(
            "test",
            1,
            &[checked("a.js", rule_with_max_lines(limit), evidence)],
            NOW,
        );

        let failed = report
            .findings
            .iter()
            .any(|f| f.severity == Severity::Error);
        prop_assert_eq!(failed, newlines as u64 > limit);
    }

    #[test]
    fn evaluation_is_deterministic(
        sizes in prop::collection::vec(0u64..1_000, 0..8),
        min in 1u64..1_000,
    ) {
        let files: Vec<_> = sizes
            .iter()
            .enumerate()
            .map(|(i, size)| {
                checked(
                    &format!("f{i}.bin"),
                    EffectiveRule {
                        bigger_than: Some(SizeBound::Bytes(min)),
                        ..EffectiveRule::default()
                    },
                    found(*size),
                )
            })
            .collect();

        let first = evaluate("test", files.len() as u32, &files, NOW);
        let second = evaluate("test", files.len() as u32, &files, NOW);
        prop_assert_eq!(first.outcome, second.outcome);
        prop_assert_eq!(first.findings, second.findings);
    }
}
