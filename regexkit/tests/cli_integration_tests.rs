// regexkit/tests/cli_integration_tests.rs
//! Integration tests for the `regexkit` binary.
//!
//! Each test runs the compiled executable through `assert_cmd`, feeding input
//! either through `--input` or stdin, and asserts on stdout and the exit code.
//! JSON output is parsed with `serde_json` rather than compared as text.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn regexkit() -> Command {
    let mut cmd = Command::cargo_bin("regexkit").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_validate_reports_valid_and_invalid() {
    regexkit()
        .args(["validate", r"\w+"])
        .assert()
        .success()
        .stdout("valid\n");

    regexkit()
        .args(["validate", r"(\w+"])
        .assert()
        .code(1)
        .stdout("invalid\n");
}

#[test]
fn test_extract_with_groups_and_limit() {
    let all = stdout_json(regexkit().args(["extract", r"(\w+)@(\w+)\.com", "-i", "a@b.com c@d.com"]));
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["groups"], serde_json::json!(["a@b.com", "a", "b"]));
    assert_eq!(all[1]["start"], 8);

    let limited = stdout_json(regexkit().args(["extract", r"\d", "--limit", "2", "-i", "a1b2c3"]));
    assert_eq!(limited.as_array().unwrap().len(), 2);

    let none = stdout_json(regexkit().args(["extract", r"\d", "--limit", "0", "-i", "a1b2c3"]));
    assert!(none.as_array().unwrap().is_empty());
}

#[test]
fn test_extract_rejects_bad_limit_and_options() {
    regexkit()
        .args(["extract", r"\d", "--limit", "-5", "-i", "123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("limit"));

    regexkit()
        .args(["extract", r"\d", "--options", "1", "-i", "123"])
        .assert()
        .code(2);

    regexkit()
        .args(["extract", r"(\d", "-i", "123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid regex pattern"));
}

#[test]
fn test_extract_case_insensitive_option() {
    let found = stdout_json(regexkit().args(["extract", "abc", "-o", "2", "-i", "ABC abc"]));
    assert_eq!(found.as_array().unwrap().len(), 2);
}

#[test]
fn test_extract_reads_stdin() {
    let found = stdout_json(regexkit().args(["extract", r"\d+"]).write_stdin("12 and 345\n"));
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[1]["groups"][0], "345");
}

#[test]
fn test_matches_and_find() {
    regexkit()
        .args(["matches", r"\d+", "-i", "12345"])
        .assert()
        .success()
        .stdout("true\n");

    regexkit()
        .args(["matches", r"\d+", "-i", "12a45"])
        .assert()
        .code(1)
        .stdout("false\n");

    regexkit()
        .args(["find", r"\d+", "-i", "12a45"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_sweep_with_default_catalog() {
    let found = stdout_json(regexkit().args(["sweep", "-i", "contact:\nuser@home.com"]));
    assert_eq!(found["email_address"], serde_json::json!(["user@home.com"]));
    assert!(found.get("ip_v4_address").is_none());
}

#[test]
fn test_sweep_with_custom_catalog_only() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "patterns:\n  ticket: 'TKT-\\d+'\n  disabled: ''")?;
    let path = file.path().to_str().unwrap();

    let found = stdout_json(regexkit().args([
        "sweep",
        "--catalog",
        path,
        "--no-defaults",
        "-i",
        "TKT-1 and user@home.com",
    ]));
    let map = found.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(found["ticket"], serde_json::json!(["TKT-1"]));
    Ok(())
}

#[test]
fn test_sweep_input_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "server at 10.1.2.3")?;
    let found = stdout_json(regexkit().args(["sweep", "-f", file.path().to_str().unwrap()]));
    assert_eq!(found["ip_v4_address"], serde_json::json!(["10.1.2.3"]));
    Ok(())
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let first = regexkit()
        .args(["generate", r"\d+[abc]", "--length", "4", "--seed", "7", "-n", "3"])
        .output()
        .unwrap();
    let second = regexkit()
        .args(["generate", r"\d+[abc]", "--length", "4", "--seed", "7", "-n", "3"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 5);
        assert!(line[..4].chars().all(|c| c.is_ascii_digit()));
        assert!("abc".contains(&line[4..]));
    }
}

#[test]
fn test_generate_rejects_negative_length() {
    regexkit()
        .args(["generate", r"\w*", "--length", "-1"])
        .assert()
        .code(2);
}

#[test]
fn test_range_lesser_and_sql() {
    regexkit()
        .args(["range", "30", "--sql"])
        .assert()
        .success()
        .stdout("[1-2][0-9]\n^[0-9]$\n");

    regexkit()
        .args(["range", "14000", "--comparison", "equal"])
        .assert()
        .success()
        .stdout("14000\n");

    regexkit()
        .args(["range", "5", "--comparison", "greater"])
        .assert()
        .code(2);
}
