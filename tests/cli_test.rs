mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::{row_with, valid_row, write_csv};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("telecheck"));
    cmd.arg("tests/fixtures/instruments.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("row,field,message\n"))
        .stdout(predicate::str::contains("2,email,cannot be empty"))
        .stdout(predicate::str::contains("2,routing_number,is invalid"))
        .stdout(predicate::str::contains(
            "2,account_type,\"must be personal or business, checking or savings\"",
        ))
        // Row 1 is valid
        .stdout(predicate::str::contains("\n1,").not());

    Ok(())
}

#[test]
fn test_cli_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("telecheck"));
    cmd.arg("tests/fixtures/instruments.csv")
        .arg("--format")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let lines: Vec<serde_json::Value> = String::from_utf8(output)?
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["valid"], true);
    assert_eq!(lines[1]["valid"], false);
    assert_eq!(lines[1]["errors"].as_array().unwrap().len(), 3);

    Ok(())
}

#[test]
fn test_cli_fail_on_invalid() {
    let mut cmd = Command::new(cargo_bin!("telecheck"));
    cmd.arg("tests/fixtures/instruments.csv")
        .arg("--fail-on-invalid");

    cmd.assert().failure().code(1);
}

#[test]
fn test_cli_fail_on_invalid_passes_clean_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.csv");
    write_csv(&path, &[valid_row(), row_with("account_type", "")]).unwrap();

    let mut cmd = Command::new(cargo_bin!("telecheck"));
    cmd.arg(&path).arg("--fail-on-invalid");

    cmd.assert()
        .success()
        .stdout(predicate::eq("row,field,message\n"));
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("telecheck"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
