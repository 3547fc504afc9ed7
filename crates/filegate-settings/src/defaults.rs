//! Filename-derived default rules, merged underneath caller-supplied rules.
//!
//! Built assets follow a naming convention: an underscore-prefixed name
//! (`_page.css`) is the flattened build output of its source counterpart
//! (`page.css`). The defaults encode the house expectations for such files:
//! a flattened asset must stay small and must not contain unresolved import
//! or include directives.

use crate::model::{RuleConfig, SizeBoundConfig};
use regex::Regex;
use std::sync::LazyLock;

/// A single-quoted or double-quoted string with no line break inside.
const STRING_RE: &str = r#"(?:(?:'[^'\r\n]*')|(?:"[^"\r\n]*"))"#;

/// Matches CSS `@import` of a quoted string or a `url(...)` reference
/// (quoted or bare).
pub fn import_pattern() -> String {
    let url = format!(r#"(?:(?:url\(\s*{STRING_RE}\s*\))|(?:url\(\s*[^\s\r\n'"]*\s*\)))"#);
    format!(r"(?:@import\s+({url}|{STRING_RE}))")
}

/// Matches unresolved build-include directives in JS output: an embedded
/// `include:<path>` directive wrapped in `{/*! */}`, `[/*! */]`, `/*! */` or
/// quote markers, plus `link("path")` and `include("path");` calls.
pub fn include_pattern() -> String {
    let wrapped = [
        (r"\{/\*!?", r"\*/\}"),
        (r"\[/\*!?", r"\*/\]"),
        (r"/\*!?", r"\*/"),
        (r#"['"]"#, r#"['"]"#),
    ]
    .iter()
    .map(|(open, close)| format!(r"(?:{open}\s*include:(.*?)\s*{close})"))
    .collect::<Vec<_>>()
    .join("|");

    format!(r#"{wrapped}|link\(['"]([^@][^"']+?)['"]\)|include\(['"]([^@][^"']+?)['"]\);?"#)
}

static DEFAULT_RULES: LazyLock<Vec<(Regex, RuleConfig)>> = LazyLock::new(|| {
    let flattened_css = RuleConfig {
        max_new_lines: Some(50),
        blacklist: Some(import_pattern()),
        ..RuleConfig::default()
    };
    let plain_css = RuleConfig {
        bigger_than: Some(SizeBoundConfig::Bytes(10)),
        ..RuleConfig::default()
    };
    let flattened_js = RuleConfig {
        max_new_lines: Some(50),
        blacklist: Some(include_pattern()),
        ..RuleConfig::default()
    };

    // First match wins; order is significant.
    vec![
        (pattern(r"_[^/]+\.webp\.css$"), flattened_css.clone()),
        (pattern(r"_[^/]+\.css$"), flattened_css),
        (pattern(r"\.css$"), plain_css),
        (pattern(r"_[^/]+\.js$"), flattened_js),
    ]
});

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static default pattern compiles")
}

/// Derive the implicit base rule for a file name (path stripped by the
/// caller). Returns an empty record when no convention applies.
pub fn defaults_for(file_name: &str) -> RuleConfig {
    for (pattern, rule) in DEFAULT_RULES.iter() {
        if pattern.is_match(file_name) {
            return rule.clone();
        }
    }
    RuleConfig::default()
}
