//! Integration tests for configuration files and their commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("wordsent.toml");

    let mut cmd = Command::cargo_bin("wordsent").unwrap();
    cmd.args([
        "generate-config",
        "--output",
        output_path.to_str().unwrap(),
        "--html-tag",
        "p",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Configuration template generated successfully",
    ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("[boundary]"));
    assert!(content.contains("html_tags = [\"p\"]"));
    assert!(content.contains("[output]"));
}

#[test]
fn test_generated_config_validates() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wordsent.toml");

    Command::cargo_bin("wordsent")
        .unwrap()
        .args(["generate-config", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    Command::cargo_bin("wordsent")
        .unwrap()
        .args(["validate", "-c", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[boundary]\ndiscard_patterns = [\"[\"]\n").unwrap();

    Command::cargo_bin("wordsent")
        .unwrap()
        .args(["validate", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_process_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wordsent.toml");
    let input_path = temp_dir.path().join("tokens.txt");

    fs::write(
        &config_path,
        r#"
[boundary]
boundary_pattern = "[.;]"
discard = ["<NL>"]
allow_empty_sentences = true

[output]
joiner = "_"
"#,
    )
    .unwrap();
    fs::write(&input_path, "a\n;\nb\n<NL>\n<NL>\nc\n").unwrap();

    Command::cargo_bin("wordsent")
        .unwrap()
        .arg("process")
        .arg("-i")
        .arg(&input_path)
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("a_;\nb\n\nc\n");
}

#[test]
fn test_flags_override_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wordsent.toml");
    let input_path = temp_dir.path().join("tokens.txt");

    fs::write(&config_path, "[boundary]\nboundary_pattern = \";\"\n").unwrap();
    fs::write(&input_path, "a\n;\nb\n.\nc\n").unwrap();

    Command::cargo_bin("wordsent")
        .unwrap()
        .arg("process")
        .arg("-i")
        .arg(&input_path)
        .arg("-c")
        .arg(&config_path)
        .args(["--boundary-pattern", r"\."])
        .assert()
        .success()
        .stdout("a ; b .\nc\n");
}

#[test]
fn test_default_format_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wordsent.toml");
    let input_path = temp_dir.path().join("tokens.txt");

    fs::write(&config_path, "[output]\ndefault_format = \"markdown\"\n").unwrap();
    fs::write(&input_path, "Hi\n.\n").unwrap();

    Command::cargo_bin("wordsent")
        .unwrap()
        .arg("process")
        .arg("-i")
        .arg(&input_path)
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. Hi .\n"));

    Command::cargo_bin("wordsent")
        .unwrap()
        .arg("process")
        .arg("-i")
        .arg(&input_path)
        .arg("-c")
        .arg(&config_path)
        .args(["-f", "text"])
        .assert()
        .success()
        .stdout("Hi .\n");
}
