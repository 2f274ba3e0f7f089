use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn mortar() -> Command {
    let mut cmd = Command::cargo_bin("mortar").expect("mortar binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn text_output_lists_both_bearings_and_every_charge() {
    mortar()
        .args(["--launch", "0, 0, 0", "--target", "0, 0, 1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bearing 1: 0.00 degrees"))
        .stdout(predicate::str::contains("Bearing 2 (Opposite): 180.00 degrees"))
        .stdout(predicate::str::contains("Distance: 1000.00 studs"))
        .stdout(predicate::str::contains("Elevation Angle for C3: 82.99 degrees"))
        .stdout(predicate::str::contains("Time of Flight for C3: 9.11 seconds"))
        .stdout(predicate::str::contains("C4"));
}

#[test]
fn single_bearing_and_charge_selection() {
    mortar()
        .args([
            "--launch",
            "0,0,0",
            "--target",
            "300,0,400",
            "--single-bearing",
            "-c",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bearing: "))
        .stdout(predicate::str::contains("Bearing 2").not())
        .stdout(predicate::str::contains("C1"))
        .stdout(predicate::str::contains("C0").not());
}

#[test]
fn unreachable_target_reports_no_solution_per_charge() {
    mortar()
        .args(["--launch", "0, 0, 0", "--target", "0, 0, 100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No feasible solution for C0 within angle limits.",
        ))
        .stdout(predicate::str::contains(
            "No feasible solution for C4 within angle limits.",
        ));
}

#[test]
fn json_output_is_machine_readable() {
    let output = mortar()
        .args([
            "--launch",
            "-5, 2, 10",
            "--target",
            "295, 2, 410",
            "--format",
            "json",
        ])
        .output()
        .expect("run mortar");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert!((value["horizontal_range"].as_f64().unwrap() - 500.0).abs() < 1e-9);
    assert_eq!(value["solutions"].as_array().unwrap().len(), 5);
}

#[test]
fn csv_output_has_row_per_charge() {
    mortar()
        .args(["--launch", "0,0,0", "--target", "0,0,1000", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("charge,"))
        .stdout(predicate::str::contains("C4,"));
}

#[test]
fn config_file_overrides_charge_table() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(file, "[[charges]]\nindex = 7\nvelocity = 500.0").unwrap();

    mortar()
        .args(["--launch", "0,0,0", "--target", "0,0,1000", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("C7"))
        .stdout(predicate::str::contains("C0").not());
}

#[test]
fn malformed_coordinates_fail() {
    mortar()
        .args(["--launch", "1, 2", "--target", "0,0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("three comma-separated values"));
}

#[test]
fn unknown_charge_fails() {
    mortar()
        .args(["--launch", "0,0,0", "--target", "0,0,1000", "-c", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("C9"));
}
