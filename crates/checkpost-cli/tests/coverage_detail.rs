//! Integration tests for `checkpost coverage-detail`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn checkpost_cmd() -> Command {
    let mut cmd = Command::cargo_bin("checkpost").unwrap();
    cmd.env_remove("COVERAGE_DETAIL_FILE_COUNT");
    cmd
}

fn coverage_fixtures() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .join("tests")
        .join("fixtures")
        .join("coverage")
}

#[test]
fn writes_table_matching_golden() {
    let fixtures = coverage_fixtures();
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().join("coverage-detail.md");

    checkpost_cmd()
        .args([
            "coverage-detail",
            "--input",
            fixtures.join("coverage.json").to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("覆盖率详细信息生成成功"));

    let actual = std::fs::read_to_string(&out).unwrap();
    let expected = std::fs::read_to_string(fixtures.join("expected.coverage-detail.md")).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn file_count_from_environment() {
    let fixtures = coverage_fixtures();
    let temp = tempfile::tempdir().unwrap();
    let out = temp.path().join("coverage-detail.md");

    checkpost_cmd()
        .args([
            "coverage-detail",
            "--input",
            fixtures.join("coverage.json").to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .env("COVERAGE_DETAIL_FILE_COUNT", "1")
        .assert()
        .success();

    let actual = std::fs::read_to_string(&out).unwrap();
    assert!(actual.contains("src/core/checkin.py"));
    assert!(!actual.contains("src/notif/notify.py"));
}

#[test]
fn defaults_resolve_against_workdir() {
    let fixtures = coverage_fixtures();
    let temp = tempfile::tempdir().unwrap();
    std::fs::copy(fixtures.join("coverage.json"), temp.path().join("coverage.json")).unwrap();

    checkpost_cmd()
        .args(["--workdir", temp.path().to_str().unwrap(), "coverage-detail", "--top-n", "2"])
        .assert()
        .success();

    let actual = std::fs::read_to_string(temp.path().join("coverage-detail.md")).unwrap();
    assert_eq!(actual.lines().count(), 4);
}

#[test]
fn missing_report_fails_and_leaves_message() {
    let temp = tempfile::tempdir().unwrap();

    checkpost_cmd()
        .args(["--workdir", temp.path().to_str().unwrap(), "coverage-detail"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("checkpost error: read coverage report"));

    let written = std::fs::read_to_string(temp.path().join("coverage-detail.md")).unwrap();
    assert!(written.starts_with("生成覆盖率详情失败"));
}
