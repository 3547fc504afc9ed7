//! Use case orchestration for filegate.
//!
//! This crate provides the application layer: it coordinates the settings,
//! inspect, and domain layers into complete check runs and assembles the
//! report envelope. The CLI crate depends on this; it only handles argument
//! parsing and artifact I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{
    run_check, run_rules, runtime_error_report, verdict_exit_code, CheckInput, CheckOutput,
};
pub use render::{render_markdown, serialize_report};
