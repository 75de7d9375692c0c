//! Integration tests for the report command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::moodjour_cmd;

const TOML_EXPORT: &str = r#"
[[entries]]
id = 3
text = "Feeling hopeless"
mood = "sad"
created_at = "2025-01-17T12:00:00+00:00"

[[entries]]
id = 2
text = "Crying again"
mood = "sad"
created_at = "2025-01-16T12:00:00+00:00"

[[entries]]
id = 1
text = "Lonely evening"
mood = "sad"
created_at = "2025-01-15T12:00:00+00:00"
"#;

#[test]
fn test_report_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("mood-data.toml");
    fs::write(&path, TOML_EXPORT).unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 3"))
        .stdout(predicate::str::contains("Dominant mood: Sad"))
        .stdout(predicate::str::contains("Consider Self-Care"))
        .stdout(predicate::str::contains("100% of your recent entries"));
}

#[test]
fn test_report_session_export_roundtrip() {
    let temp = TempDir::new().unwrap();

    let output = moodjour_cmd()
        .current_dir(temp.path())
        .args(["session", "--demo"])
        .write_stdin("add great day with friends\nexport\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let document = &stdout[stdout.find("[[entries]]").unwrap()..];

    let path = temp.path().join("backup.toml");
    fs::write(&path, document).unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("great day with friends"))
        .stdout(predicate::str::contains("Total entries: 3"))
        .stdout(predicate::str::contains("Positive Trend Detected"));
}

#[test]
fn test_report_json_by_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("export.data");
    fs::write(
        &path,
        r#"[{"id": 1, "text": "calm", "mood": "neutral", "created_at": "2025-01-17T08:00:00Z"}]"#,
    )
    .unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("neutrality"));
}

#[test]
fn test_report_missing_file() {
    let temp = TempDir::new().unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["report", "nope.toml"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Export file not found"));
}

#[test]
fn test_report_invalid_mood() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(
        &path,
        "[[entries]]\nid = 1\ntext = \"x\"\nmood = \"angry\"\ncreated_at = \"2025-01-17T12:00:00Z\"\n",
    )
    .unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(&path)
        .assert()
        .failure()
        .code(4);
}
