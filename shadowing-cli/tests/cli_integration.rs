//! Integration tests for the shadowing CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_segment_text_output() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("segment").arg("-i").arg(fixture_path("passage.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "[1] (10 words) The cat sat. It was raining heavily outside today loudly.",
        ))
        .stdout(predicate::str::contains("[2] (1 words) Run."));
}

#[test]
fn test_segment_json_output() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("passage.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"))
        .stdout(predicate::str::contains("\"word_count\": 10"))
        .stdout(predicate::str::contains("\"text\""));
}

#[test]
fn test_segment_markdown_output() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("passage.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total turns: 2 (11 words)*"));
}

#[test]
fn test_segment_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("turns.txt");

    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("passage.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("The cat sat."));
    assert!(content.contains("Run."));
}

#[test]
fn test_segment_missing_input_fails() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("segment").arg("-i").arg("no-such-file.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_segment_validate_rejects_short_passage() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("passage.txt"))
        .arg("--validate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("passage too short"));
}

#[test]
fn test_score_perfect_attempt() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("score")
        .arg("-i")
        .arg(fixture_path("passage.txt"))
        .arg("-r")
        .arg(fixture_path("recognized-perfect.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[1] 100.0%"))
        .stdout(predicate::str::contains("[2] 100.0%"))
        .stdout(predicate::str::contains("Total score: 100.0%"));
}

#[test]
fn test_score_partial_attempts_from_lines() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("score")
        .arg("-i")
        .arg(fixture_path("passage.txt"))
        .arg("-r")
        .arg(fixture_path("recognized-partial.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[1] 100.0%"))
        .stdout(predicate::str::contains("[2] 0.0%"))
        .stdout(predicate::str::contains("Total score: 50.0%"));
}

#[test]
fn test_score_json_report() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("score")
        .arg("-i")
        .arg(fixture_path("passage.txt"))
        .arg("-r")
        .arg(fixture_path("recognized-perfect.json"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_score\": 100.0"))
        .stdout(predicate::str::contains("\"turn_results\""));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("shadowing").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text, json, markdown"));
}
