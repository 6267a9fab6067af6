//! Configuration integration tests.
//!
//! Config discovery, format parsing and precedence, checked end to end with
//! `info --json`, plus the settings that change analysis output.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run a subcommand with `--json` from a directory and parse its output.
fn json_from(dir: &Path, args: &[&str]) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap()])
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

fn info_json(dir: &Path) -> Value {
    json_from(dir, &["info"])
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["input_limit_bytes"], 5 * 1024 * 1024);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".remarq.toml"), "should report dotfile: {reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("remarq.toml"), "wrap_width = 72\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["wrap_width"], 72);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("remarq.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.yaml"), "log_level: warn\nwrap_width: 60\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["wrap_width"], 60);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.json"), r#"{"log_level": "error"}"#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".remarq.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".remarq.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["log_level"], "debug");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.toml"), r#"log_level = "debug""#).unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let json = json_from(
        tmp.path(),
        &["--config", explicit.to_str().unwrap(), "info"],
    );

    assert_eq!(json["config"]["log_level"], "error");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "{reported}");
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".remarq.toml"), r#"log_level = "error""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".remarq.toml"),
        "log_level = \"warn\"\nunknown_field = \"ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Lexicon Extensions
// =============================================================================

#[test]
fn extra_non_adverbs_are_not_flagged() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("note.txt"), "We met bradley there.\n").unwrap();

    let before = json_from(tmp.path(), &["stats", "note.txt"]);
    assert_eq!(before["adverbs"], 1);

    fs::write(tmp.path().join(".remarq.toml"), "non_adverbs = [\"bradley\"]\n").unwrap();
    let after = json_from(tmp.path(), &["stats", "note.txt"]);
    assert_eq!(after["adverbs"], 0);

    let info = info_json(tmp.path());
    assert_eq!(info["config"]["extra_non_adverbs"], 1);
}

#[test]
fn extra_complex_phrases_are_detected_and_suggested() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".remarq.toml"),
        "[complex_phrases]\nsynergize = [\"work together\", \"cooperate\"]\n",
    )
    .unwrap();
    fs::write(tmp.path().join("note.txt"), "We must synergize now.\n").unwrap();

    let stats = json_from(tmp.path(), &["stats", "note.txt"]);
    assert_eq!(stats["complex_phrases"], 1);

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "suggest", "synergize"])
        .assert()
        .success()
        .stdout(predicate::str::diff("# work together, cooperate\n"));
}

#[test]
fn configured_wrap_width_applies_to_check() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".remarq.toml"), "wrap_width = 30\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--color",
            "never",
            "check",
            "--example",
            "--no-stats",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for line in stdout.lines() {
        assert!(line.chars().count() <= 30, "line too long: {line:?}");
    }
}
