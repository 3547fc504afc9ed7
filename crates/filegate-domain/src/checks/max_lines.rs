use crate::policy::EffectiveRule;
use filegate_types::{ids, Finding, RelPath, Severity};
use serde_json::json;

pub fn run(path: &RelPath, rule: &EffectiveRule, data: &str, out: &mut Vec<Finding>) {
    let Some(limit) = rule.max_new_lines else {
        return;
    };

    let newlines = data.bytes().filter(|&b| b == b'\n').count() as u64;
    if newlines > limit {
        out.push(Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_FILE_LINES.to_string(),
            code: ids::CODE_TOO_MANY_NEWLINES.to_string(),
            message: format!("too much newlines! {newlines} > {limit}"),
            path: path.clone(),
            help: Some(
                "Generated single-purpose assets are expected to stay small.".to_string(),
            ),
            data: json!({"newlines": newlines, "limit": limit}),
        });
    }
}
