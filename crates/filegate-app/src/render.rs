//! Report rendering: JSON serialization and a PR-comment friendly markdown
//! summary.

use filegate_types::{FilegateReport, Severity, Verdict};

pub fn serialize_report(report: &FilegateReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

pub fn render_markdown(report: &FilegateReport) -> String {
    let mut out = String::new();

    out.push_str("# Filegate report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Files: {} checked / {} listed, {} failed\n- Findings: {}\n\n",
        verdict,
        report.data.files_checked,
        report.data.files_listed,
        report.data.files_failed,
        report.data.findings_total
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");
    for f in &report.findings {
        let sev = match f.severity {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        };
        out.push_str(&format!(
            "- [{}] `{}` / `{}` — {}: {}\n",
            sev,
            f.check_id,
            f.code,
            f.path.as_str(),
            f.message
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
