use filegate_types::{FilegateData, Finding, RunOutcome, Severity, Verdict};

#[derive(Clone, Debug, Default)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// All findings in evaluation order (per file: access, size, age, lines,
    /// blacklist) — the order they would be logged in.
    pub findings: Vec<Finding>,
    pub counts: SeverityCounts,
    pub outcome: RunOutcome,
    pub data: FilegateData,
}
