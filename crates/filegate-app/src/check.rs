//! The `check` use case: resolve rules, gather evidence, evaluate, report.

use anyhow::Context;
use camino::Utf8Path;
use filegate_domain::report::DomainReport;
use filegate_settings::{FileRules, FilegateConfigV1, Overrides};
use filegate_types::{
    forward_finding, ids, FilegateData, FilegateReport, Finding, Logger, RelPath, RunOutcome,
    Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Directory every rule key is resolved against.
    pub base_dir: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: FilegateReport,
    /// The aggregate pair: any failure, files checked.
    pub outcome: RunOutcome,
}

/// Run the check use case: parse config, resolve the plan, inspect files,
/// evaluate, and produce the report envelope. Findings are forwarded to the
/// logger as they are evaluated.
pub fn run_check(input: CheckInput<'_>, logger: &dyn Logger) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        FilegateConfigV1::default()
    } else {
        filegate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let plan = filegate_settings::resolve_plan(&cfg, &input.overrides).context("resolve rules")?;
    let domain = run_plan(input.base_dir, &plan, logger);

    let finished_at = OffsetDateTime::now_utc();
    let report = FilegateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: domain.verdict,
        findings: domain.findings,
        data: domain.data,
    };

    Ok(CheckOutput {
        report,
        outcome: domain.outcome,
    })
}

/// Programmatic entry point: check `rules` under `base_dir` for `env`.
///
/// The aggregate pair is returned rather than delivered through a callback;
/// a caller that only cares about the logged output can ignore it. Checks
/// and logging run either way.
pub fn run_rules(
    rules: &FileRules,
    base_dir: &Utf8Path,
    env: &str,
    logger: &dyn Logger,
) -> anyhow::Result<RunOutcome> {
    let cfg = FilegateConfigV1 {
        env: Some(env.to_string()),
        rules: rules.clone(),
        ..FilegateConfigV1::default()
    };
    let plan = filegate_settings::resolve_plan(&cfg, &Overrides::default())?;
    Ok(run_plan(base_dir, &plan, logger).outcome)
}

/// Drive one resolved plan to completion: inspect every planned file behind
/// a join-all barrier, evaluate, and forward every finding in evaluation
/// order. An empty plan reports immediately with no evidence gathering.
fn run_plan(base_dir: &Utf8Path, plan: &filegate_domain::policy::CheckPlan, logger: &dyn Logger) -> DomainReport {
    let now = OffsetDateTime::now_utc();
    let checked = if plan.entries.is_empty() {
        Vec::new()
    } else {
        futures::executor::block_on(filegate_inspect::inspect_plan(base_dir, plan))
    };

    let report = filegate_domain::evaluate(&plan.env, plan.files_listed, &checked, now);
    for finding in &report.findings {
        forward_finding(logger, finding);
    }
    report
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

/// Best-effort report emitted when the run itself failed before any file
/// was checked (unparsable config, invalid pattern).
pub fn runtime_error_report(message: &str) -> FilegateReport {
    let now = OffsetDateTime::now_utc();
    FilegateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            path: RelPath::default(),
            help: None,
            data: serde_json::Value::Null,
        }],
        data: FilegateData::default(),
    }
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "filegate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
