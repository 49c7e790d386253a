//! CLI integration tests using assert_cmd.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn skill_quiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("skill-quiz").unwrap()
}

fn bundled() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/quizes")
}

#[test]
fn list_prints_ids_and_titles() {
    skill_quiz()
        .args(["list", "--dir", bundled()])
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript-basics\tjavascript basics"))
        .stdout(predicate::str::contains("rust-ownership\trust ownership"));
}

#[test]
fn list_json() {
    skill_quiz()
        .args(["--dir", bundled(), "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"rust-ownership\""));
}

#[test]
fn list_missing_directory_fails() {
    skill_quiz()
        .args(["list", "--dir", "definitely-missing-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_bundled_quizzes() {
    skill_quiz()
        .args(["validate", "--dir", bundled()])
        .assert()
        .success()
        .stdout(predicate::str::contains("JavaScript basics (3 questions)"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn validate_reports_warnings_and_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("off-by-one.json"),
        r#"{"id": "off-by-one", "title": "Off", "questions": [
            {"title": "q", "options": ["a", "b"], "correctAnswers": [2]}
        ]}"#,
    )
    .unwrap();

    skill_quiz()
        .arg("validate")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Q1] correct answer 2 is out of range"))
        .stdout(predicate::str::contains("1 warning(s) found"));

    fs::write(dir.path().join("broken.json"), "not json").unwrap();

    skill_quiz()
        .arg("validate")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("1 quiz file(s) failed to load"));
}
