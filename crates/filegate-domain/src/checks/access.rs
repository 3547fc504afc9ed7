use crate::model::StatOutcome;
use filegate_types::{ids, Finding, RelPath, Severity};
use serde_json::json;

pub fn run(path: &RelPath, evidence: &StatOutcome, out: &mut Vec<Finding>) {
    match evidence {
        StatOutcome::Missing => out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_FILE_ACCESS.to_string(),
            code: ids::CODE_NOT_FOUND.to_string(),
            message: "File not found".to_string(),
            path: path.clone(),
            help: Some(
                "The configured path does not exist relative to the base directory.".to_string(),
            ),
            data: json!({"path": path.as_str()}),
        }),
        StatOutcome::Failed(err) => out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_FILE_ACCESS.to_string(),
            code: ids::CODE_STAT_FAILED.to_string(),
            message: format!("failed to stat! {err}"),
            path: path.clone(),
            help: None,
            data: json!({"error": err}),
        }),
        StatOutcome::Found(_) => {}
    }
}

pub fn read_failure(path: &RelPath, err: &str, out: &mut Vec<Finding>) {
    out.push(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_FILE_ACCESS.to_string(),
        code: ids::CODE_READ_FAILED.to_string(),
        message: format!("failed to read! {err}"),
        path: path.clone(),
        help: None,
        data: json!({"error": err}),
    });
}
