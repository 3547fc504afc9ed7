use crate::model::{FileFacts, ParentEvidence};
use crate::policy::{EffectiveRule, SizeBound};
use filegate_types::{ids, Finding, RelPath, Severity};
use serde_json::json;

/// Size bounds. `less_than` is wired as the maximum bound and `bigger_than`
/// as the minimum bound — preserved as observed, not corrected. The numeric
/// branch runs first and wins outright; the parent branch only runs when a
/// bound is `Parent` and no numeric bound already failed.
pub fn run(path: &RelPath, rule: &EffectiveRule, facts: &FileFacts, out: &mut Vec<Finding>) {
    let max = rule.less_than;
    let min = rule.bigger_than;
    if max.is_none() && min.is_none() {
        return;
    }

    if let Some(SizeBound::Bytes(min_bytes)) = min
        && facts.size < min_bytes
    {
        out.push(too_small(path, facts.size, min_bytes, None));
        return;
    }
    if let Some(SizeBound::Bytes(max_bytes)) = max
        && facts.size > max_bytes
    {
        out.push(too_big(path, facts.size, max_bytes, None));
        return;
    }

    if !rule.needs_parent() {
        return;
    }
    match &facts.parent {
        Some(ParentEvidence::SameAsFile) => out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_FILE_SIZE.to_string(),
            code: ids::CODE_PARENT_IS_SELF.to_string(),
            message: "parent is same as file".to_string(),
            path: path.clone(),
            help: Some(
                "A parent bound needs an underscore-prefixed or .ie-suffixed variant name."
                    .to_string(),
            ),
            data: json!({"path": path.as_str()}),
        }),
        Some(ParentEvidence::Missing { parent }) => out.push(Finding {
            severity: Severity::Warning,
            check_id: ids::CHECK_FILE_SIZE.to_string(),
            code: ids::CODE_PARENT_MISSING.to_string(),
            message: format!("no parent found while checking size. parent: {parent}"),
            path: path.clone(),
            help: None,
            data: json!({"parent": parent.as_str()}),
        }),
        Some(ParentEvidence::Found { parent, size }) => {
            // Any set min bound (byte count or token) activates the
            // comparison against the parent size, and likewise for max.
            if min.is_some() && facts.size < *size {
                out.push(too_small(path, facts.size, *size, Some(parent)));
                return;
            }
            if max.is_some() && facts.size > *size {
                out.push(too_big(path, facts.size, *size, Some(parent)));
            }
        }
        // The inspect layer gathers parent evidence whenever a bound is
        // `Parent`; nothing to compare if it is absent.
        None => {}
    }
}

fn too_small(path: &RelPath, size: u64, limit: u64, parent: Option<&RelPath>) -> Finding {
    let message = match parent {
        Some(parent) => format!("too small! {size} < {limit} ({parent})"),
        None => format!("too small! {size} < {limit}"),
    };
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_FILE_SIZE.to_string(),
        code: ids::CODE_TOO_SMALL.to_string(),
        message,
        path: path.clone(),
        help: None,
        data: json!({
            "size": size,
            "limit": limit,
            "parent": parent.map(|p| p.as_str()),
        }),
    }
}

fn too_big(path: &RelPath, size: u64, limit: u64, parent: Option<&RelPath>) -> Finding {
    let message = match parent {
        Some(parent) => format!("too big! {size} > {limit} ({parent})"),
        None => format!("too big! {size} > {limit}"),
    };
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_FILE_SIZE.to_string(),
        code: ids::CODE_TOO_BIG.to_string(),
        message,
        path: path.clone(),
        help: None,
        data: json!({
            "size": size,
            "limit": limit,
            "parent": parent.map(|p| p.as_str()),
        }),
    }
}
