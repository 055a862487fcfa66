//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "tests"
//! csel_type: "source"
//! csel_scope: "test"
//! csel_description: "End-to-end selection scenarios, batch evaluation and report export."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::fs;

use cablesel_engine::{
    analyse_circuit, evaluate, evaluate_many, is_ring_candidate,
    model::{
        CableType, CircuitSpec, ConductorMaterial, EnvironmentalSettings, InstallationContext,
        InstallationMethod, LoadType, Phase, ProtectiveDevice, TripCurve,
    },
    tables::CostTier,
    ComplianceStatus, ReportExporter, SelectionError, Suitability,
};
use tempfile::tempdir;
use uuid::Uuid;

fn circuit(name: &str, load_w: f64, run_length_m: f64, load_type: LoadType) -> CircuitSpec {
    CircuitSpec {
        id: Uuid::new_v4(),
        name: name.into(),
        total_load_w: load_w,
        voltage: 230.0,
        phase: Phase::Single,
        power_factor: None,
        cable_type: CableType::TwinAndEarth,
        conductor: ConductorMaterial::Copper,
        run_length_m,
        installation_method: InstallationMethod::ClippedDirect,
        protective_device: ProtectiveDevice::Mcb(TripCurve::B),
        load_type,
        special_requirements: Vec::new(),
    }
}

fn motor_feed(ambient_c: f64) -> InstallationContext {
    InstallationContext::new(15000.0, 400.0, 150.0)
        .with_phase(Phase::Three)
        .with_power_factor(0.85)
        .with_installation_method(InstallationMethod::Conduit)
        .with_load_type(LoadType::Motor)
        .with_ambient_temperature(ambient_c)
}

#[test]
fn lighting_circuit_on_clipped_twin_and_earth() {
    let context = InstallationContext::new(1000.0, 230.0, 20.0)
        .with_load_type(LoadType::Lighting)
        .with_ambient_temperature(30.0)
        .with_grouping_factor(1.0);
    let report = analyse_circuit(&context, false, None).unwrap();

    assert!((report.design_current_a - 4.3478).abs() < 1e-3);
    assert_eq!(report.derating_factor, 1.0);

    let candidate = report
        .recommendations
        .iter()
        .find(|c| c.size == "2.5mm²")
        .unwrap();
    assert!(candidate.checks.current_ok);
    assert_eq!(candidate.suitability, Suitability::Suitable);
    assert!(candidate.voltage_drop_percent < 3.0);
    assert!(report.has_suitable());
}

#[test]
fn hot_conduit_run_downgrades_candidates() {
    let baseline = evaluate(&motor_feed(30.0), false).unwrap();
    let hot_context = motor_feed(45.0);
    let hot = evaluate(&hot_context, false).unwrap();

    let report = analyse_circuit(&hot_context, false, None).unwrap();
    assert!((report.derating_factor - 0.7505).abs() < 1e-9);
    assert!((report.design_current_a - 25.47).abs() < 0.01);

    let tier = |list: &[cablesel_engine::CableRecommendation], size: &str| {
        list.iter().find(|c| c.size == size).unwrap().suitability
    };
    assert_eq!(tier(&baseline, "4.0mm²"), Suitability::Marginal);
    assert_eq!(tier(&hot, "4.0mm²"), Suitability::Unsuitable);

    let downgraded = baseline
        .iter()
        .filter(|before| {
            let after = hot.iter().find(|c| c.size == before.size).unwrap();
            after.suitability > before.suitability
        })
        .count();
    assert!(downgraded >= 1);
}

#[test]
fn kitchen_ring_is_auto_detected() {
    let environment = EnvironmentalSettings::default();
    let ring = circuit("Kitchen ring", 6000.0, 90.0, LoadType::Power);
    assert!(is_ring_candidate(&ring.with_environment(&environment)));

    let results = evaluate_many(&[ring.clone()], &environment).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].circuit_id, ring.id);

    let report = &results[0].report;
    assert!(report.is_ring);
    let sizes: Vec<_> = report.recommendations.iter().map(|c| c.size.as_str()).collect();
    assert_eq!(sizes, vec!["2.5mm²", "4.0mm²"]);

    assert_eq!(report.compliance.len(), 6);
    assert_eq!(report.compliance[4].requirement, "Ring final circuit length");
    assert_eq!(report.compliance[4].status, ComplianceStatus::Pass);
    assert_eq!(report.compliance[5].requirement, "Ring final circuit load");
    assert_eq!(report.compliance[5].status, ComplianceStatus::Pass);
}

#[test]
fn batch_mixes_ring_and_radial_circuits() {
    let environment = EnvironmentalSettings {
        ambient_temperature_c: 35.0,
        ..EnvironmentalSettings::default()
    };
    let circuits = vec![
        circuit("Sockets", 6000.0, 60.0, LoadType::Power),
        circuit("Lights", 800.0, 30.0, LoadType::Lighting),
        circuit("Garage feed", 9000.0, 140.0, LoadType::Power),
    ];
    let results = evaluate_many(&circuits, &environment).unwrap();

    let topology: Vec<_> = results.iter().map(|r| r.report.is_ring).collect();
    assert_eq!(topology, vec![true, false, false]);
    assert_eq!(results[2].report.recommendations.len(), 13);
    assert!(results
        .iter()
        .all(|r| (r.report.derating_factor - 0.94).abs() < 1e-9));
}

#[test]
fn batch_rejects_invalid_circuit() {
    let mut broken = circuit("Broken", 1000.0, 10.0, LoadType::Power);
    broken.voltage = 0.0;
    let err = evaluate_many(&[broken], &EnvironmentalSettings::default()).unwrap_err();
    assert!(matches!(err, SelectionError::InvalidInput { field: "voltage", .. }));
}

#[test]
fn evaluation_is_deterministic_and_ordered() {
    let context = motor_feed(45.0);
    let first = evaluate(&context, false).unwrap();
    let second = evaluate(&context, false).unwrap();
    assert_eq!(first, second);

    for pair in first.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.suitability <= b.suitability);
        if a.suitability == b.suitability {
            assert!(a.cost <= b.cost);
            if a.cost == b.cost {
                assert!(a.size_mm2 < b.size_mm2);
            }
        }
    }
    assert_eq!(first[0].suitability, Suitability::Suitable);
    assert_eq!(first[0].cost, CostTier::Medium);
}

#[test]
fn exports_selection_reports() {
    let dir = tempdir().unwrap();
    let context = InstallationContext::new(1000.0, 230.0, 20.0).with_load_type(LoadType::Lighting);
    let report = analyse_circuit(&context, false, Some(0.8)).unwrap();

    let written = ReportExporter::new()
        .export_selection(&report, dir.path())
        .unwrap();
    assert_eq!(written.len(), 3);

    let compliance = fs::read_to_string(dir.path().join("compliance.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&compliance).unwrap();
    assert_eq!(value["schema"]["title"], "ComplianceChecks");
    assert_eq!(value["data"].as_array().unwrap().len(), 4);
    assert!(value["timestamp"].as_str().unwrap().contains('T'));

    let recommendations = fs::read_to_string(dir.path().join("recommendations.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&recommendations).unwrap();
    assert_eq!(value["data"][0]["suitability"], "suitable");
}

#[test]
fn exports_batch_report() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("site-a");
    let results = evaluate_many(
        &[circuit("Sockets", 4000.0, 45.0, LoadType::Power)],
        &EnvironmentalSettings::default(),
    )
    .unwrap();

    let path = ReportExporter::new()
        .export_batch(&results, &nested)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["data"][0]["name"], "Sockets");
    assert_eq!(value["data"][0]["report"]["is_ring"], true);
}

#[test]
fn heavy_feed_outgrows_twin_and_earth() {
    let context = InstallationContext::new(45_000.0, 230.0, 30.0);
    let report = analyse_circuit(&context, false, None).unwrap();
    let top = report.best().unwrap();
    assert!(top.size_mm2 > 10.0);
    assert!(!top.cable_type_fits);
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.title.starts_with("Change cable type") && s.description.contains("SWA")));

    let armoured = context.with_cable_type(CableType::Swa);
    let report = analyse_circuit(&armoured, false, None).unwrap();
    assert!(report.best().unwrap().cable_type_fits);
    assert!(report
        .suggestions
        .iter()
        .all(|s| !s.title.starts_with("Change cable type")));
}
