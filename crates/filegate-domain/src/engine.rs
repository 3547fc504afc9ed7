use crate::checks;
use crate::model::CheckedFile;
use crate::report::{DomainReport, SeverityCounts};
use filegate_types::{FilegateData, Finding, RunOutcome, Severity, Verdict};
use time::OffsetDateTime;

/// Evaluate every checked file and fold the per-file results into one
/// overall status.
///
/// A file fails iff it produced at least one error finding. The overall
/// verdict is `fail` if any file failed, `warn` if only warnings were
/// produced, `pass` otherwise. `files_checked` counts the files that had an
/// applicable rule, not the files that failed.
pub fn evaluate(
    env: &str,
    files_listed: u32,
    checked: &[CheckedFile],
    now: OffsetDateTime,
) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();
    let mut files_failed = 0u32;

    for file in checked {
        let before = findings.len();
        checks::run_all(file, now, &mut findings);
        if findings[before..]
            .iter()
            .any(|f| f.severity == Severity::Error)
        {
            files_failed += 1;
        }
    }

    let counts = SeverityCounts::from_findings(&findings);
    let verdict = if counts.error > 0 {
        Verdict::Fail
    } else if counts.warning > 0 {
        Verdict::Warn
    } else {
        Verdict::Pass
    };

    let files_checked = checked.len() as u32;
    let data = FilegateData {
        env: env.to_string(),
        files_listed,
        files_checked,
        files_failed,
        findings_total: findings.len() as u32,
    };

    DomainReport {
        verdict,
        outcome: RunOutcome {
            any_failed: verdict == Verdict::Fail,
            files_checked,
        },
        findings,
        counts,
        data,
    }
}
