use assert_cmd::Command;
use regex::Regex;
use std::io::Write;

fn fleetindex() -> Command {
    let mut cmd = Command::cargo_bin("fleetindex").expect("binary should build");
    cmd.env_remove("RUST_LOG").env_remove("LOG_LEVEL");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute binary");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_savings_table() {
    let stdout = stdout_of(fleetindex().args(["savings", "--fleet-size", "25"]));

    let fuel_row = Regex::new(r"Fuel\s*\|[^|]*\|\s*RM 129,000").unwrap();
    assert!(fuel_row.is_match(&stdout), "stdout:\n{}", stdout);
    assert!(stdout.contains("Total Annual Savings"));
}

#[test]
fn test_cli_savings_json_monthly() {
    let stdout = stdout_of(fleetindex().args([
        "savings",
        "--fleet-size",
        "25",
        "--period",
        "monthly",
        "--currency",
        "USD",
        "--json",
        "--embed",
    ]));

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(json["periodLabel"], "Monthly");
    assert_eq!(json["formatted"]["fuel"], "USD 10,750");
}

#[test]
fn test_cli_unparseable_numbers_degrade_to_zero() {
    let stdout = stdout_of(fleetindex().args([
        "savings",
        "--fleet-size",
        "25",
        "--fuel-before",
        "abc",
        "--json",
        "--embed",
    ]));

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(json["estimate"]["fuel"]["per_vehicle"], 0.0);
    assert_eq!(json["formatted"]["fuel"], "RM 0");
    // brakes still use their defaults: 25 vehicles at 720 each
    assert_eq!(json["formatted"]["brakes"], "RM 18,000");

    let stdout = stdout_of(fleetindex().args(["savings", "--fleet-size", "lots", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(json["estimate"]["fleet_size"], 0.0);
    assert_eq!(json["formatted"]["total"], "RM 0");
}

#[test]
fn test_cli_assumptions_file_with_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "fuel_unit_cost": 4.3, "annual_distance": 120000 }}"#).unwrap();

    let stdout = stdout_of(fleetindex().args([
        "savings",
        "--fleet-size",
        "25",
        "--json",
        "--assumptions-file",
        file.path().to_str().unwrap(),
        "--fuel-after",
        "29",
    ]));

    // (120000 / 100) * (30 - 29) * 4.3 * 25
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["formatted"]["fuel"], "RM 129,000");
}

#[test]
fn test_cli_batch() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,fleet_size").unwrap();
    writeln!(file, "north-depot,25").unwrap();
    writeln!(file, "south-depot,50").unwrap();

    let stdout = stdout_of(fleetindex().args([
        "batch",
        "--scenarios",
        file.path().to_str().unwrap(),
    ]));

    assert!(stdout.contains("north-depot"));
    assert!(stdout.contains("south-depot"));
    assert!(stdout.contains("RM 258,000"));
}

#[test]
fn test_cli_secure_run_without_token_fails_fast() {
    let output = fleetindex()
        .env_remove("FPI_API_TOKEN")
        .args([
            "run",
            "--mode",
            "secure",
            // nothing listens here; the call must never be attempted
            "--api-base",
            "http://127.0.0.1:9",
        ])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("authentication required"), "stderr: {}", stderr);
}

#[test]
fn test_cli_rejects_out_of_range_multi_fleet() {
    let output = fleetindex()
        .args([
            "run",
            "--shape",
            "multi",
            "--fleet-size",
            "10",
            "--api-base",
            "http://127.0.0.1:9",
        ])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fleet_size must be within 50..=500"), "stderr: {}", stderr);
}
