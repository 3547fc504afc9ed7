use crate::policy::EffectiveRule;
use filegate_types::{ids, Finding, RelPath, Severity};
use serde_json::json;

/// Matched text is reported truncated: the first 140 characters of all
/// matches joined by spaces.
const MATCH_EXCERPT_CHARS: usize = 140;

pub fn run(path: &RelPath, rule: &EffectiveRule, data: &str, out: &mut Vec<Finding>) {
    let Some(blacklist) = &rule.blacklist else {
        return;
    };

    let matches: Vec<&str> = blacklist
        .regex
        .find_iter(data)
        .map(|m| m.as_str())
        .collect();
    if matches.is_empty() {
        return;
    }

    let joined = matches.join(" ");
    let excerpt: String = joined.chars().take(MATCH_EXCERPT_CHARS).collect();
    out.push(Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_FILE_BLACKLIST.to_string(),
        code: ids::CODE_BLACKLIST_MATCH.to_string(),
        message: format!(
            "blacklist! matching regexp: {} string: \"{excerpt}...\"",
            blacklist.source
        ),
        path: path.clone(),
        help: None,
        data: json!({
            "pattern": blacklist.source,
            "matches": matches.len(),
        }),
    });
}
