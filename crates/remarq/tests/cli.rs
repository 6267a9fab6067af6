//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::{Cursor, Write};
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A scratch directory with one file in it.
fn scratch(name: &str, contents: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    (tmp, path)
}

/// A `.docx` archive whose body holds the given paragraphs; `""` is an
/// empty paragraph.
fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<w:p/>".to_string()
            } else {
                format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>")
            }
        })
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    cursor.into_inner()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("suggest"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_example_prints_summary() {
    cmd()
        .args(["check", "--example", "--color", "never", "--width", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paragraphs: 6"))
        .stdout(predicate::str::contains("Sentences: 16"))
        .stdout(predicate::str::contains("1 out of 16 sentences are very hard to read."))
        .stdout(predicate::str::contains("=".repeat(36)));
}

#[test]
fn check_without_color_has_no_escapes() {
    cmd()
        .args(["check", "--example", "--color", "never", "--no-stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("Paragraphs:").not());
}

#[test]
fn check_with_color_marks_findings() {
    let (_tmp, path) = scratch("note.txt", "I think we should leave.\n");
    cmd()
        .args(["check", "--color", "always", "--no-stats"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[36mI think\u{1b}[0m"));
}

#[test]
fn check_file_counts_findings() {
    let (_tmp, path) = scratch(
        "draft.txt",
        "The ball was kicked.\n\nWe will utilize it in order to win.\n",
    );
    cmd()
        .args(["check", "--color", "never"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Paragraphs: 2"))
        .stdout(predicate::str::contains("- 1 uses of passive voice."))
        .stdout(predicate::str::contains("- 2 phrases have simpler alternatives."));
}

#[test]
fn check_json_reports_findings() {
    let (_tmp, path) = scratch("note.txt", "I think we should leave.\n");
    let output = cmd()
        .args(["check", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["statistics"]["qualifiers"], 1);
    assert_eq!(json["findings"][0]["kind"], "qualifier");
    assert_eq!(json["findings"][0]["text"], "I think");
    assert_eq!(json["paragraphs"][0], " I think we should leave.");
}

#[test]
fn check_markdown_skips_code_and_headings() {
    let (_tmp, path) = scratch(
        "README.md",
        "# I think this heading\n\nWe left.\n\n```\nI think code\n```\n",
    );
    let output = cmd().args(["check", "--json"]).arg(&path).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["statistics"]["total_paragraphs"], 1);
    assert_eq!(json["statistics"]["qualifiers"], 0);
}

#[test]
fn check_docx_reads_body_paragraphs() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("report.docx");
    fs::write(
        &path,
        docx_bytes(&["I think we should leave.", "", "The ball was kicked."]),
    )
    .unwrap();

    let output = cmd().args(["check", "--json"]).arg(&path).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["statistics"]["total_paragraphs"], 2);
    assert_eq!(json["statistics"]["qualifiers"], 1);
    assert_eq!(json["statistics"]["passive_voice"], 1);
    assert_eq!(json["paragraphs"][1], "");
}

#[test]
fn check_rejects_broken_docx() {
    let (_tmp, path) = scratch("report.docx", "not really a word file\n");
    cmd()
        .args(["check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid .docx archive"));
}

#[test]
fn check_missing_file_fails() {
    cmd()
        .args(["check", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("here.txt"));
}

#[test]
fn check_requires_file_or_example() {
    cmd().arg("check").assert().failure();
}

#[test]
fn check_rejects_input_over_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.toml"), "max_input_bytes = 4\n").unwrap();
    fs::write(tmp.path().join("big.txt"), "This is longer than four bytes.\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "big.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_accepts_large_input() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".remarq.toml"),
        "max_input_bytes = 4\ndisable_input_limit = true\n",
    )
    .unwrap();
    fs::write(tmp.path().join("big.txt"), "This is longer than four bytes.\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "big.txt"])
        .assert()
        .success();
}

// =============================================================================
// Stats Command
// =============================================================================

#[test]
fn stats_prints_summary_only() {
    let (_tmp, path) = scratch("note.txt", "We left early.\n\nThey stayed.\n");
    cmd()
        .args(["stats", "--color", "never"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Paragraphs: 2"))
        .stdout(predicate::str::contains("Sentences: 2"));
}

#[test]
fn stats_json_is_statistics_object() {
    let (_tmp, path) = scratch("note.txt", "We left. They stayed.\n");
    let output = cmd().args(["stats", "--json"]).arg(&path).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_paragraphs"], 1);
    assert_eq!(json["total_sentences"], 2);
    assert!(json.get("findings").is_none());
}

// =============================================================================
// Suggest Command
// =============================================================================

#[test]
fn suggest_known_phrase() {
    cmd()
        .args(["suggest", "in order to"])
        .assert()
        .success()
        .stdout(predicate::str::diff("# to\n"));
}

#[test]
fn suggest_unknown_phrase() {
    cmd()
        .args(["suggest", "banana"])
        .assert()
        .success()
        .stdout(predicate::str::diff("# no results\n"));
}

#[test]
fn suggest_reads_stdin_lines() {
    cmd()
        .arg("suggest")
        .write_stdin("a number of\n\nutilize\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("# many, some\n# use\n"));
}

#[test]
fn suggest_json_lists_alternatives() {
    let output = cmd()
        .args(["suggest", "--json", "utilize"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["phrase"], "utilize");
    assert_eq!(json[0]["alternatives"][0], "use");
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .args(["info", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_is_valid() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert!(json["config"].is_object());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn chdir_to_missing_directory_fails() {
    cmd()
        .args(["-C", "/definitely/not/a/dir", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}
