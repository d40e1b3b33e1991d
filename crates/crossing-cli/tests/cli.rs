//! End-to-end tests for the `crossing` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn crossing() -> Command {
    let mut cmd = Command::cargo_bin("crossing").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("CROSSING_CONFIG")
        .env_remove("CROSSING_ROOT_TOLERANCE")
        .env_remove("CROSSING_INTEGRAL_PRECISION");
    cmd
}

#[test]
fn test_area_prints_integral() {
    crossing()
        .arg("area")
        .assert()
        .success()
        .stdout(predicate::str::contains("9.8066"))
        .stdout(predicate::str::contains("Crossing points").not());
}

#[test]
fn test_area_points_and_iterations() {
    crossing()
        .args(["area", "-p", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(-2.39054, 2.09158)"))
        .stdout(predicate::str::contains("(-0.54951, 9.09902)"))
        .stdout(predicate::str::contains("(1.25176, 5.49648)"))
        .stdout(predicate::str::contains("Iterations per point"));
}

#[test]
fn test_area_minimal() {
    crossing()
        .args(["--format", "minimal", "area"])
        .assert()
        .success()
        .stdout("9.8066\n");
}

#[test]
fn test_area_json() {
    let output = crossing().args(["area", "-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let area = report["area"].as_f64().unwrap();
    assert!((area - 9.8066).abs() < 1e-4);
    assert_eq!(report["crossings"].as_array().unwrap().len(), 3);
    assert_eq!(report["crossings"][0]["iterations"], 4);
}

#[test]
fn test_root_with_reversed_bracket() {
    crossing()
        .args(["root", "linear", "exponential", "--from", "2", "--to", "1", "-f", "minimal"])
        .assert()
        .success()
        .stdout("1.25176\n");
}

#[test]
fn test_root_negative_bracket() {
    crossing()
        .args(["root", "hyperbola", "exponential", "--from", "-3", "--to", "-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(-2.39054, 2.09158)"));
}

#[test]
fn test_root_iteration_cap() {
    crossing()
        .args([
            "root",
            "hyperbola",
            "linear",
            "--from",
            "-1",
            "--to",
            "-0.25",
            "--max-iterations",
            "2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did not converge after 2 iterations"));
}

#[test]
fn test_integral_minimal() {
    crossing()
        .args([
            "integral", "sine", "zero", "--from", "0", "--to", "3.14159265", "-e", "1e-5", "-f",
            "minimal",
        ])
        .assert()
        .success()
        .stdout("2.00000\n");
}

#[test]
fn test_integral_degenerate_interval_fails() {
    crossing()
        .args(["integral", "sine", "zero", "--from", "1", "--to", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid precision or interval"));
}

#[test]
fn test_unknown_curve_rejected() {
    crossing()
        .args(["root", "parabola", "zero", "--from", "0", "--to", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown curve"));
}

#[test]
fn test_curves_listing() {
    crossing()
        .arg("curves")
        .assert()
        .success()
        .stdout(predicate::str::contains("hyperbola"))
        .stdout(predicate::str::contains("-5/x"))
        .stdout(predicate::str::contains("cosine-square"));
}

#[test]
fn test_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "integral_precision = 1e-6").unwrap();
    writeln!(file, "format = \"minimal\"").unwrap();

    crossing()
        .arg("--config")
        .arg(file.path())
        .arg("area")
        .assert()
        .success()
        .stdout("9.8069\n");
}

#[test]
fn test_flag_overrides_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "integral_precision = 1e-6").unwrap();

    crossing()
        .arg("--config")
        .arg(file.path())
        .args(["area", "--precision", "1e-4", "-f", "minimal"])
        .assert()
        .success()
        .stdout("9.8066\n");
}

#[test]
fn test_invalid_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tolerance = 1e-6").unwrap();

    crossing()
        .arg("--config")
        .arg(file.path())
        .arg("curves")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_tolerance_flag() {
    crossing()
        .args(["area", "-e", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tolerance"));
}

#[test]
fn test_integral_json_reports_segments() {
    let output = crossing()
        .args(["integral", "sine", "zero", "--from", "0", "--to", "1", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["segments"], 20);
    assert!((report["integral"].as_f64().unwrap() - (1.0 - 1f64.cos())).abs() < 1e-3);
}
