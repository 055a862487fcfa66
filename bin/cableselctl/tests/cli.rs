//! ---
//! csel_section: "05-external-interfaces"
//! csel_subsection: "tests"
//! csel_type: "source"
//! csel_scope: "test"
//! csel_description: "Smoke tests for the cableselctl binary."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

fn cableselctl() -> Command {
    let mut cmd = Command::cargo_bin("cableselctl").unwrap();
    cmd.env_remove("CABLESEL_CONFIG");
    cmd
}

#[test]
fn prints_ring_table() {
    let output = cableselctl().args(["tables", "--ring"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sizes = value.as_object().unwrap();
    assert_eq!(sizes.len(), 2);
    assert!(sizes.contains_key("2.5mm²"));
    assert!(sizes.contains_key("4.0mm²"));
}

#[test]
fn catalogue_filters_by_method_and_current() {
    let output = cableselctl()
        .args(["catalogue", "--method", "buried-direct", "--min-current", "500"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let profiles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let types: Vec<_> = profiles
        .as_array()
        .unwrap()
        .iter()
        .map(|profile| profile["cable_type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["swa", "nyy-j"]);
}

#[test]
fn catalogue_lists_cheaper_alternatives() {
    let output = cableselctl()
        .args(["catalogue", "--alternatives-to", "swa", "--size", "16", "--budget", "20"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let alternatives: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(alternatives.as_array().unwrap().len(), 3);
    assert_eq!(alternatives[0]["cable_type"], "pvc-single");
}

#[test]
fn evaluates_circuit_and_exports_reports() {
    let dir = tempdir().unwrap();
    let circuit = dir.path().join("lighting.yaml");
    fs::write(
        &circuit,
        "total_load_w: 1000\nvoltage: 230\nrun_length_m: 20\nload_type: lighting\nprotective_device: MCB type B\n",
    )
    .unwrap();
    let reports = dir.path().join("reports");

    let output = cableselctl()
        .arg("evaluate")
        .arg(&circuit)
        .args(["--zs", "0.9", "--output"])
        .arg(&reports)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["is_ring"], false);
    assert_eq!(report["zs_ohm"], 0.9);
    assert_eq!(report["recommendations"][0]["suitability"], "suitable");
    assert_eq!(report["compliance"][0]["status"], "pass");

    for name in ["recommendations.json", "suggestions.json", "compliance.json"] {
        assert!(reports.join(name).exists(), "{name} missing");
    }
}

#[test]
fn auto_ring_detects_socket_circuit() {
    let dir = tempdir().unwrap();
    let circuit = dir.path().join("sockets.json");
    fs::write(
        &circuit,
        r#"{"total_load_w": 6000, "voltage": 230, "run_length_m": 90, "load_type": "power"}"#,
    )
    .unwrap();

    let output = cableselctl()
        .arg("evaluate")
        .arg(&circuit)
        .arg("--auto-ring")
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["is_ring"], true);
    assert_eq!(report["compliance"].as_array().unwrap().len(), 6);
}

#[test]
fn batch_uses_named_environment() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("cablesel.toml");
    fs::write(
        &config,
        "[environments.plant-room]\nambient_temperature_c = 45.0\ngrouping_factor = 0.8\n",
    )
    .unwrap();
    let circuits = dir.path().join("circuits.yaml");
    fs::write(
        &circuits,
        "- name: Pump\n  total_load_w: 5500\n  voltage: 400\n  phase: three\n  run_length_m: 40\n  load_type: motor\n",
    )
    .unwrap();

    let output = cableselctl()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg(&circuits)
        .args(["--environment", "plant-room"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["name"], "Pump");
    let factor = results[0]["report"]["derating_factor"].as_f64().unwrap();
    assert!((factor - 0.632).abs() < 1e-9);
}

#[test]
fn unknown_environment_fails() {
    let dir = tempdir().unwrap();
    let circuits = dir.path().join("circuits.json");
    fs::write(
        &circuits,
        r#"[{"name": "Lights", "total_load_w": 500, "voltage": 230, "run_length_m": 10}]"#,
    )
    .unwrap();

    let output = cableselctl()
        .arg("batch")
        .arg(&circuits)
        .args(["--environment", "nowhere"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nowhere"));
}
