//! CLI integration tests. Merge and build paths run on temp fixtures and
//! need no real PDFs.

use assert_cmd::Command;
use predicates::prelude::*;

fn record_line(case: &str, date: &str) -> String {
    serde_json::json!({
        "case_number": case,
        "decision_date": date,
        "text": "решение суда ".repeat(20),
    })
    .to_string()
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("courtset")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn extract_missing_file_fails() {
    Command::cargo_bin("courtset")
        .unwrap()
        .args(["extract", "/no/such/decision.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn extract_rejects_non_pdf_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake_2023-01-01.pdf");
    std::fs::write(&path, b"this is not a pdf").unwrap();

    Command::cargo_bin("courtset")
        .unwrap()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to extract"));
}

#[test]
fn merge_deduplicates_by_case() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.jsonl");
    let b = dir.path().join("b.jsonl");
    let out = dir.path().join("merged.jsonl");

    std::fs::write(
        &a,
        format!(
            "{}\n{}\n",
            record_line("А40-1", "2023-01-10"),
            record_line("А40-2", "2023-01-11")
        ),
    )
    .unwrap();
    std::fs::write(
        &b,
        format!(
            "{}\n{}\n",
            record_line("а40-2", "2023-05-01"),
            record_line("А40-3", "2023-05-02")
        ),
    )
    .unwrap();

    Command::cargo_bin("courtset")
        .unwrap()
        .arg("merge")
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 duplicates dropped"));

    let merged = std::fs::read_to_string(&out).unwrap();
    assert_eq!(merged.lines().count(), 3);
    for line in merged.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("case_number").is_some());
    }
}

#[test]
fn merge_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("courtset")
        .unwrap()
        .arg("merge")
        .arg(dir.path().join("absent.jsonl"))
        .arg("--output")
        .arg(dir.path().join("out.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn merge_reports_bad_json_line() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.jsonl");
    std::fs::write(&a, "{broken\n").unwrap();

    Command::cargo_bin("courtset")
        .unwrap()
        .arg("merge")
        .arg(&a)
        .arg("--output")
        .arg(dir.path().join("out.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn build_on_empty_directory_writes_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let pdfs = dir.path().join("pdfs");
    std::fs::create_dir(&pdfs).unwrap();
    let out = dir.path().join("dataset.jsonl");

    Command::cargo_bin("courtset")
        .unwrap()
        .arg("build")
        .arg(&pdfs)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 0 records"));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "");
}

#[test]
fn build_skips_undecodable_pdfs_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let pdfs = dir.path().join("pdfs");
    std::fs::create_dir(&pdfs).unwrap();
    std::fs::write(pdfs.join("А40-1-2023_2023-01-10.pdf"), b"garbage").unwrap();
    let out = dir.path().join("dataset.jsonl");

    Command::cargo_bin("courtset")
        .unwrap()
        .arg("build")
        .arg(&pdfs)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping"))
        .stderr(predicate::str::contains("1 skipped"));
}

#[test]
fn build_merge_carries_prior_records() {
    let dir = tempfile::tempdir().unwrap();
    let pdfs = dir.path().join("pdfs");
    std::fs::create_dir(&pdfs).unwrap();
    let prior = dir.path().join("prior.jsonl");
    std::fs::write(&prior, format!("{}\n", record_line("А40-9", "2022-03-01"))).unwrap();
    let out = dir.path().join("dataset.jsonl");

    Command::cargo_bin("courtset")
        .unwrap()
        .arg("build")
        .arg(&pdfs)
        .arg("--output")
        .arg(&out)
        .arg("--merge")
        .arg(&prior)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 1 records"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("А40-9"));
}

#[test]
fn build_on_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("courtset")
        .unwrap()
        .arg("build")
        .arg(dir.path().join("nowhere"))
        .arg("--output")
        .arg(dir.path().join("out.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
