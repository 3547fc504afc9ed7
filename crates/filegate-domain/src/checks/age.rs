use crate::model::FileFacts;
use crate::policy::{AgeLimit, EffectiveRule};
use filegate_types::{ids, Finding, RelPath, Severity};
use serde_json::json;

pub fn run(
    path: &RelPath,
    rule: &EffectiveRule,
    facts: &FileFacts,
    now: time::OffsetDateTime,
    out: &mut Vec<Finding>,
) {
    let Some(limit) = &rule.max_age else {
        return;
    };

    let max_seconds = match limit {
        AgeLimit::Seconds(s) => *s,
        AgeLimit::Malformed(raw) => {
            out.push(Finding {
                severity: Severity::Warning,
                check_id: ids::CHECK_FILE_AGE.to_string(),
                code: ids::CODE_MALFORMED_MAX_AGE.to_string(),
                message: format!("strange param max_age: {raw}"),
                path: path.clone(),
                help: Some("max_age must be a number of seconds.".to_string()),
                data: json!({"max_age": raw}),
            });
            return;
        }
    };

    let Some(mtime) = facts.mtime else {
        return;
    };
    let age_ms = (now - mtime).whole_milliseconds() as f64;
    let age_seconds = age_ms / 1000.0;

    if age_ms > max_seconds * 1000.0 {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_FILE_AGE.to_string(),
            code: ids::CODE_OBSOLETE.to_string(),
            message: format!("obsolete! {mtime} {age_seconds}s > {max_seconds}s"),
            path: path.clone(),
            help: Some("Regenerate the file or raise max_age.".to_string()),
            data: json!({
                "age_seconds": age_seconds,
                "max_age_seconds": max_seconds,
            }),
        });
    } else if age_ms < 0.0 {
        out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_FILE_AGE.to_string(),
            code: ids::CODE_FUTURE_MTIME.to_string(),
            message: format!("strange last modified: {mtime} {age_seconds}s in future"),
            path: path.clone(),
            help: None,
            data: json!({"age_seconds": age_seconds}),
        });
    }
}
