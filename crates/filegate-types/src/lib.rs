//! Stable DTOs and IDs used across the filegate workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical base-relative path handling
//! - the logger capability consumed by check runs

#![forbid(unsafe_code)]

pub mod ids;
pub mod logger;
pub mod path;
pub mod report;

pub use logger::{forward_finding, ConsoleLogger, Logger, SilentLogger};
pub use path::RelPath;
pub use report::{
    FilegateData, FilegateReport, Finding, ReportEnvelope, RunOutcome, Severity, ToolMeta,
    Verdict, SCHEMA_REPORT_V1,
};
