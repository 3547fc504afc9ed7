//! Integration tests for the `check` and `md` subcommands against fixture
//! trees written into temp directories.

use assert_cmd::Command;
use filegate_test_util::{normalize_nondeterministic, utf8_root, write_file};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

#[allow(deprecated)]
fn filegate() -> Command {
    Command::cargo_bin("filegate").expect("filegate binary builds")
}

fn read_report(root: &camino::Utf8Path) -> Value {
    let text = std::fs::read_to_string(root.join("artifacts/filegate/report.json"))
        .expect("report written");
    serde_json::from_str(&text).expect("report parses")
}

#[test]
fn passing_fixture_exits_zero_and_writes_the_report() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("a.css"), &"x".repeat(50));
    write_file(
        &root.join("filegate.toml"),
        r#"
[rules]
"a.css" = { bigger_than = 10 }
"#,
    );

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check"])
        .assert()
        .success();

    let report = read_report(&root);
    assert_eq!(report["schema"], "filegate.report.v1");
    assert_eq!(report["verdict"], "pass");
    assert_eq!(report["data"]["files_checked"], 1);
}

#[test]
fn violation_exits_two_and_logs_the_failure() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("a.css"), &"x".repeat(5));
    write_file(
        &root.join("filegate.toml"),
        r#"
[rules]
"a.css" = { bigger_than = 100 }
"#,
    );

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a.css: too small! 5 < 100"));

    let report = read_report(&root);
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["data"]["files_failed"], 1);
}

#[test]
fn missing_config_means_nothing_to_check() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check"])
        .assert()
        .success();

    let report = read_report(&root);
    assert_eq!(report["verdict"], "pass");
    assert_eq!(report["data"]["files_checked"], 0);
}

#[test]
fn unparsable_config_exits_one_with_a_runtime_report() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("filegate.toml"), "rules = 5\n");

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("filegate error"));

    let report = read_report(&root);
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["findings"][0]["check_id"], "tool.runtime");
}

#[test]
fn env_flag_selects_the_matching_rules() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("a.bin"), &"x".repeat(5));
    write_file(
        &root.join("filegate.toml"),
        r#"
[rules]
"a.bin" = { env = "testing", bigger_than = 100 }
"#,
    );

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "--env", "production", "check"])
        .assert()
        .success();

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "--env", "testing", "check"])
        .assert()
        .code(2);
}

#[test]
fn only_globs_restrict_the_run() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("a.css"), &"x".repeat(50));
    write_file(
        &root.join("filegate.toml"),
        r#"
[rules]
"a.css" = { bigger_than = 10 }
"missing.js" = { max_new_lines = 5 }
"#,
    );

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "--only", "*.css", "check"])
        .assert()
        .success();

    let report = read_report(&root);
    assert_eq!(report["data"]["files_checked"], 1);
    assert_eq!(report["data"]["files_listed"], 2);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("a.css"), &"x".repeat(5));
    write_file(
        &root.join("filegate.toml"),
        r#"
[rules]
"a.css" = { bigger_than = 100 }
"#,
    );

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check"])
        .assert()
        .code(2);
    let first = normalize_nondeterministic(read_report(&root));

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check"])
        .assert()
        .code(2);
    let second = normalize_nondeterministic(read_report(&root));

    assert_eq!(first, second);
}

#[test]
fn md_renders_an_existing_report() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("a.css"), &"x".repeat(50));
    write_file(
        &root.join("filegate.toml"),
        r#"
[rules]
"a.css" = { bigger_than = 10 }
"#,
    );

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check"])
        .assert()
        .success();

    filegate()
        .current_dir(&root)
        .arg("md")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Filegate report"))
        .stdout(predicate::str::contains("Verdict: **PASS**"));
}

#[test]
fn markdown_artifact_is_written_when_requested() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("a.css"), &"x".repeat(5));
    write_file(
        &root.join("filegate.toml"),
        r#"
[rules]
"a.css" = { bigger_than = 100 }
"#,
    );

    filegate()
        .current_dir(&root)
        .args(["--base-dir", root.as_str(), "check", "--write-markdown"])
        .assert()
        .code(2);

    let md = std::fs::read_to_string(root.join("artifacts/filegate/comment.md"))
        .expect("markdown written");
    assert!(md.contains("Verdict: **FAIL**"));
    assert!(md.contains("too small! 5 < 100"));
}
