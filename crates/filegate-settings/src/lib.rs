//! Config parsing, default rules, and per-file rule resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings or built programmatically.

#![forbid(unsafe_code)]

mod defaults;
mod model;
mod resolve;

pub use defaults::defaults_for;
pub use model::{FileRules, FilegateConfigV1, RuleConfig, RuleEntry, SizeBoundConfig};
pub use resolve::{resolve_plan, resolve_rules, Overrides};

/// Parse `filegate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FilegateConfigV1> {
    let cfg: FilegateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
