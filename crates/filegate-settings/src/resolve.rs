use crate::defaults;
use crate::model::{FileRules, FilegateConfigV1, RuleConfig, SizeBoundConfig};
use anyhow::Context;
use filegate_domain::policy::{
    AgeLimit, BlacklistRule, CheckPlan, EffectiveRule, PlanEntry, SizeBound,
};
use filegate_types::RelPath;
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use serde_json::Value as JsonValue;

/// CLI overrides layered on top of the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub env: Option<String>,
    pub only: Vec<String>,
}

/// Select and merge the candidate records that apply to `env`.
///
/// A record applies when it has no `env` tag, or its tag equals `env` and
/// `skip` is not set. Later applicable records overwrite earlier fields.
/// Returns `None` when nothing applied — distinct from an applicable record
/// with no constraint fields, which still schedules the file for a stat.
pub fn resolve_rules(env: &str, candidates: &[RuleConfig]) -> Option<RuleConfig> {
    let mut merged = RuleConfig::default();
    let mut applied = false;
    for candidate in candidates {
        if !candidate.applies_to(env) {
            continue;
        }
        merged.merge_from(candidate);
        applied = true;
    }
    applied.then_some(merged)
}

/// Resolve the whole rule list into the per-file check plan for one run:
/// pick the applicable candidates per file, seed the filename-derived
/// defaults underneath, and normalize into typed effective rules.
pub fn resolve_plan(cfg: &FilegateConfigV1, overrides: &Overrides) -> anyhow::Result<CheckPlan> {
    let env = overrides
        .env
        .clone()
        .or_else(|| cfg.env.clone())
        .unwrap_or_default();

    let only = if overrides.only.is_empty() {
        &cfg.only
    } else {
        &overrides.only
    };
    let only_set = build_only_set(only)?;

    let entries = resolve_entries(&cfg.rules, &env, only_set.as_ref())?;
    Ok(CheckPlan {
        env,
        files_listed: cfg.rules.len() as u32,
        entries,
    })
}

fn resolve_entries(
    rules: &FileRules,
    env: &str,
    only_set: Option<&GlobSet>,
) -> anyhow::Result<Vec<PlanEntry>> {
    let mut entries = Vec::new();
    for (path, entry) in rules {
        if let Some(set) = only_set
            && !set.is_match(path.as_str())
        {
            continue;
        }
        let Some(merged) = resolve_rules(env, entry.candidates()) else {
            continue;
        };

        let path = RelPath::new(path);
        let mut seeded = defaults::defaults_for(path.file_name());
        seeded.merge_from(&merged);

        entries.push(PlanEntry {
            rule: normalize(&path, seeded)?,
            path,
        });
    }
    Ok(entries)
}

/// Turn a merged permissive record into the typed rule the checks consume.
/// Zero bounds, zero line limits, and empty blacklist sources count as
/// absent. Unknown size tokens and uncompilable patterns are configuration
/// errors, raised before any file IO.
fn normalize(path: &RelPath, rule: RuleConfig) -> anyhow::Result<EffectiveRule> {
    Ok(EffectiveRule {
        less_than: size_bound(path, "less_than", rule.less_than.as_ref())?,
        bigger_than: size_bound(path, "bigger_than", rule.bigger_than.as_ref())?,
        max_age: age_limit(rule.max_age.as_ref()),
        max_new_lines: rule.max_new_lines.filter(|limit| *limit > 0),
        blacklist: blacklist(path, rule.blacklist.as_deref())?,
    })
}

fn size_bound(
    path: &RelPath,
    field: &str,
    value: Option<&SizeBoundConfig>,
) -> anyhow::Result<Option<SizeBound>> {
    match value {
        None | Some(SizeBoundConfig::Bytes(0)) => Ok(None),
        Some(SizeBoundConfig::Bytes(bytes)) => Ok(Some(SizeBound::Bytes(*bytes))),
        Some(SizeBoundConfig::Token(token)) if token == "parent" => Ok(Some(SizeBound::Parent)),
        Some(SizeBoundConfig::Token(token)) => anyhow::bail!(
            "unknown {field} token for {path}: {token:?} (expected a byte count or \"parent\")"
        ),
    }
}

fn age_limit(value: Option<&JsonValue>) -> Option<AgeLimit> {
    let value = value?;
    if value.is_null() {
        return None;
    }
    match value.as_f64() {
        Some(seconds) if seconds == 0.0 => None,
        Some(seconds) => Some(AgeLimit::Seconds(seconds)),
        None => Some(AgeLimit::Malformed(value.to_string())),
    }
}

fn blacklist(path: &RelPath, source: Option<&str>) -> anyhow::Result<Option<BlacklistRule>> {
    let Some(source) = source else {
        return Ok(None);
    };
    if source.is_empty() {
        return Ok(None);
    }
    let regex = Regex::new(source)
        .with_context(|| format!("invalid blacklist pattern for {path}: {source}"))?;
    Ok(Some(BlacklistRule {
        source: source.to_string(),
        regex,
    }))
}

fn build_only_set(patterns: &[String]) -> anyhow::Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("invalid only glob: {pattern}"))?;
        builder.add(glob);
    }
    Ok(Some(builder.build().context("compile only globset")?))
}
