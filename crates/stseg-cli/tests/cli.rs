//! End-to-end tests for the stseg binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const STATEMENT: &str =
    "Statement Header\n\n05/06/23 Rent Payment\n  1200.00\n06/06/23 Refund\n  50.00\n";

fn stseg() -> Command {
    Command::cargo_bin("stseg").unwrap()
}

#[test]
fn process_renders_report_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.txt");
    fs::write(&input, STATEMENT).unwrap();

    stseg()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== HEADER ==="))
        .stdout(predicate::str::contains("Statement Header"))
        .stdout(predicate::str::contains("--- Transaction 2 ---"))
        .stdout(predicate::str::contains("06/06/23 Refund"));
}

#[test]
fn process_writes_json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.txt");
    let output = dir.path().join("statement.json");
    fs::write(&input, STATEMENT).unwrap();

    stseg()
        .arg("process")
        .arg(&input)
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let json = fs::read_to_string(&output).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["header"][0], "Statement Header");
    assert_eq!(doc["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(doc["transactions"][0]["date"], "2023-06-05");
}

#[test]
fn process_missing_input_fails() {
    stseg()
        .arg("process")
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_structured_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), STATEMENT).unwrap();
    fs::write(dir.path().join("b.txt"), "No dates in this one\n").unwrap();

    stseg()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed: a.txt -> a_structured.txt"))
        .stdout(predicate::str::contains("2 successful, 0 failed"));

    let structured = dir.path().join("structured");
    let a = fs::read_to_string(structured.join("a_structured.txt")).unwrap();
    assert!(a.starts_with("=== HEADER ===\nStatement Header\n"));
    assert!(a.contains("--- Transaction 1 ---\n05/06/23 Rent Payment\n1200.00"));

    let b = fs::read_to_string(structured.join("b_structured.txt")).unwrap();
    assert_eq!(b, "=== HEADER ===\nNo dates in this one\n");
}

#[test]
fn batch_missing_directory_fails() {
    stseg()
        .arg("batch")
        .arg("no-such-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input directory not found"));
}

#[test]
fn batch_empty_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    stseg()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .txt files found"));
}

#[test]
fn batch_continues_past_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), STATEMENT).unwrap();
    fs::write(dir.path().join("bad.txt"), [0xffu8, 0xfe, 0x00, 0x41]).unwrap();

    stseg()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 1 failed"))
        .stdout(predicate::str::contains("not valid UTF-8"));

    // The good file is still processed
    assert!(dir.path().join("structured/good_structured.txt").exists());
    assert!(!dir.path().join("structured/bad_structured.txt").exists());
}

#[test]
fn batch_skips_existing_structured_outputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), STATEMENT).unwrap();
    // Earlier output dropped next to its input must not be reprocessed
    fs::write(dir.path().join("a_structured.txt"), "=== HEADER ===\nx\n").unwrap();

    stseg()
        .arg("batch")
        .arg(dir.path())
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 file(s) to parse"));

    assert!(!dir.path().join("a_structured_structured.txt").exists());
}

#[test]
fn batch_summary_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), STATEMENT).unwrap();

    stseg()
        .arg("batch")
        .arg(dir.path())
        .arg("--summary")
        .assert()
        .success();

    let summary = fs::read_to_string(dir.path().join("structured/summary.csv")).unwrap();
    let mut lines = summary.lines();
    assert!(lines.next().unwrap().starts_with("filename,status"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("a.txt,success,a_structured.txt,1,2,5,2023-06-05,2023-06-06"));
}
