//! End-to-end tests of the `outlay` binary.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use tempfile::TempDir;

/// Binary wired to an empty config file in `dir`, so the user's own
/// `~/.outlay/config.toml` never leaks into a test.
fn outlay(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").expect("write empty config");
    }
    let mut cmd = cargo_bin_cmd!("outlay");
    cmd.arg("--color").arg("never").arg("-c").arg(config);
    cmd
}

fn decimal(value: &Value) -> Decimal {
    let raw = value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());
    Decimal::from_str(&raw).unwrap_or_else(|e| panic!("not a decimal: {value}: {e}"))
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run outlay");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_help() {
    cargo_bin_cmd!("outlay")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("outlay")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("outlay"));
}

#[test]
fn test_solve_renders_tables() {
    let dir = tempfile::tempdir().unwrap();
    outlay(&dir)
        .args(["solve", "--budget", "5000", "--item", "chair=1000", "--item", "desk=1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chair"))
        .stdout(predicate::str::contains("desk"))
        .stdout(predicate::str::contains("optimal"))
        .stdout(predicate::str::contains("5000.00"));
}

#[test]
fn test_solve_json_spends_whole_budget() {
    let dir = tempfile::tempdir().unwrap();
    let plan = json_stdout(outlay(&dir).args([
        "--json", "solve", "--budget", "5000", "--item", "chair=1000", "--item", "desk=1500",
    ]));

    let allocation = &plan["allocation"];
    assert_eq!(allocation["status"], "optimal");
    assert_eq!(decimal(&allocation["total_spend"]), dec!(5000));
    assert_eq!(decimal(&allocation["leftover"]), Decimal::ZERO);
    assert_eq!(allocation["exhausted"], true);
    assert_eq!(allocation["quantities"].as_array().map(Vec::len), Some(2));
    assert!(plan["run_id"].is_string());
}

#[test]
fn test_solve_projects_to_requested_period() {
    let dir = tempfile::tempdir().unwrap();
    let plan = json_stdout(outlay(&dir).args([
        "--json", "solve", "--budget", "5000", "--period", "3", "--item", "chair=1000",
    ]));

    let allocation = &plan["allocation"];
    assert_eq!(plan["period"], 3);
    assert_eq!(decimal(&allocation["items"][0]["adjusted_price"]), dec!(1071.23));
    assert_eq!(allocation["quantities"][0], 4);
    assert_eq!(decimal(&allocation["total_spend"]), dec!(4284.92));
}

#[test]
fn test_solve_reads_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.toml");
    fs::write(
        &catalog,
        r#"
budget = 100
period = 1

[[items]]
name = "pen"
base_price = 3

[[items]]
name = "pad"
base_price = 7
"#,
    )
    .unwrap();

    let plan = json_stdout(outlay(&dir).arg("--json").arg("solve").arg("-i").arg(&catalog));
    assert_eq!(decimal(&plan["allocation"]["total_spend"]), dec!(100));
    assert_eq!(plan["allocation"]["items"][1]["name"], "pad");
}

#[test]
fn test_solve_flags_override_catalog_budget() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{ "budget": 100, "items": [{ "name": "pen", "base_price": 3 }] }"#,
    )
    .unwrap();

    let plan = json_stdout(
        outlay(&dir)
            .arg("--json")
            .arg("solve")
            .arg("-i")
            .arg(&catalog)
            .args(["--budget", "10"]),
    );
    assert_eq!(decimal(&plan["allocation"]["total_spend"]), dec!(9));
    assert_eq!(decimal(&plan["allocation"]["leftover"]), dec!(1));
}

#[test]
fn test_zero_price_reports_unbounded() {
    let dir = tempfile::tempdir().unwrap();
    outlay(&dir)
        .args(["solve", "--budget", "10", "--item", "free=0", "--item", "pen=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unbounded"));
}

#[test]
fn test_invalid_input_exits_with_code_two() {
    let dir = tempfile::tempdir().unwrap();

    outlay(&dir)
        .args(["solve", "--budget=-5", "--item", "pen=3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("budget"));

    outlay(&dir)
        .args(["solve", "--budget", "10", "--period", "0", "--item", "pen=3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("period"));

    outlay(&dir)
        .args(["solve", "--budget", "10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty"));

    outlay(&dir)
        .args(["solve", "--item", "pen=3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--budget"));
}

#[test]
fn test_malformed_catalog_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.toml");
    fs::write(&catalog, "budget = \n").unwrap();

    outlay(&dir)
        .arg("solve")
        .arg("-i")
        .arg(&catalog)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid catalog"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("outlay")
        .arg("-c")
        .arg(dir.path().join("absent.toml"))
        .args(["solve", "--budget", "10", "--item", "pen=3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn test_project_prints_schedule() {
    let dir = tempfile::tempdir().unwrap();
    outlay(&dir)
        .args(["project", "--price", "1000", "--from", "1", "--to", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1035.00"))
        .stdout(predicate::str::contains("1071.23"));
}

#[test]
fn test_project_json_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let body = json_stdout(outlay(&dir).args([
        "--json", "project", "--price", "1000", "--to", "3", "--growth-rate", "2",
    ]));

    let schedule = body["schedule"].as_array().expect("schedule array");
    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule[2]["period"], 3);
    assert_eq!(decimal(&schedule[2]["price"]), dec!(4000));
}

#[test]
fn test_project_rejects_reversed_range() {
    let dir = tempfile::tempdir().unwrap();
    outlay(&dir)
        .args(["project", "--price", "1", "--from", "5", "--to", "2"])
        .assert()
        .code(2);
}

#[test]
fn test_config_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("nested").join("config.toml");

    cargo_bin_cmd!("outlay")
        .args(["--color", "never", "config", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    cargo_bin_cmd!("outlay")
        .arg("-c")
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    cargo_bin_cmd!("outlay")
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_config_validate_rejects_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[pricing]\ngrowth_rate = -1\n").unwrap();

    cargo_bin_cmd!("outlay")
        .arg("-c")
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("growth_rate"));
}

#[test]
fn test_config_show_json() {
    let dir = tempfile::tempdir().unwrap();
    let body = json_stdout(outlay(&dir).args(["--json", "config", "show"]));
    assert_eq!(body["solver"]["backend"], "auto");
    assert_eq!(body["logging"]["format"], "pretty");
}
