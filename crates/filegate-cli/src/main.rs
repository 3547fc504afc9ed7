//! CLI entry point for filegate.
//!
//! This module is intentionally thin: it handles argument parsing, artifact
//! I/O, and exit codes. All business logic lives in the `filegate-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use filegate_app::{
    render_markdown, run_check, runtime_error_report, serialize_report, verdict_exit_code,
    CheckInput,
};
use filegate_settings::Overrides;
use filegate_types::{ConsoleLogger, FilegateReport};

#[derive(Parser, Debug)]
#[command(
    name = "filegate",
    version,
    about = "Batch file-validation gate for generated assets"
)]
struct Cli {
    /// Base directory every rule path is resolved against.
    #[arg(long, default_value = ".")]
    base_dir: Utf8PathBuf,

    /// Path to the filegate config TOML, relative to the base directory.
    #[arg(long, default_value = "filegate.toml")]
    config: Utf8PathBuf,

    /// Override the environment tag rules are resolved for.
    #[arg(long)]
    env: Option<String>,

    /// Restrict the run to files matching these globs (repeatable).
    #[arg(long)]
    only: Vec<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the configured files and write the report artifact.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/filegate/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/filegate/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/filegate/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (prints to stdout if absent).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, report_out.clone(), write_markdown, markdown_out.clone()),
        Commands::Md { report, output } => cmd_md(report, output),
    }
}

fn cmd_check(
    cli: &Cli,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let base_dir = cli
        .base_dir
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.base_dir.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !base_dir.exists() {
            anyhow::bail!("base directory does not exist: {}", base_dir);
        }

        // Load config if present; a missing file is allowed (defaults apply).
        let cfg_path = base_dir.join(&cli.config);
        let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();

        let overrides = Overrides {
            env: cli.env.clone(),
            only: cli.only.clone(),
        };

        let output = run_check(
            CheckInput {
                base_dir: &base_dir,
                config_text: &cfg_text,
                overrides,
            },
            &ConsoleLogger,
        )?;

        write_report_file(&report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&output.report);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(&report_out, &report);
            eprintln!("filegate error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report: FilegateReport =
        serde_json::from_str(&report_text).context("parse report json")?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn write_report_file(path: &Utf8PathBuf, report: &FilegateReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8PathBuf, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
