//! Config fixture tests - load, resolve and run scenarios from JSON files

use cyberroi_core::config::{self, load_and_resolve, load_config_file};
use cyberroi_core::{assess, render_json, render_text, MaturityLevel, RoiTier};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_enterprise_fixture_end_to_end() {
    let path = fixture_path("enterprise.json");
    let resolved = load_and_resolve(path.parent().unwrap(), Some(&path)).unwrap();
    assert_eq!(resolved.config_path, Some(path));

    let inputs = resolved.inputs.resolve();
    assert_eq!(inputs.maturity_level, MaturityLevel::Defined);
    assert_eq!(inputs.cost_per_downtime_day, 1_369_863.0);

    let report = assess(&inputs, &resolved.thresholds, &resolved.display).unwrap();
    assert_eq!(report.assessment.sle, 18_849_315.0);
    assert_eq!(report.assessment.roi_tier, RoiTier::Strong);

    let text = render_text(&report, &resolved.display);
    assert!(text.contains("ALE Before Controls    $5.65M"), "{}", text);
    assert!(text.contains("ALE After Controls     $1.88M"), "{}", text);
    assert!(text.contains("Risk Reduction         $3.77M"), "{}", text);
    assert!(text.contains("342.7% (strong)"), "{}", text);
}

#[test]
fn test_detailed_display_fixture() {
    let path = fixture_path("detailed-display.json");
    let resolved = load_and_resolve(path.parent().unwrap(), Some(&path)).unwrap();

    assert!(!resolved.display.executive_mode);
    assert!(!resolved.display.compact_mode);
    assert_eq!(resolved.thresholds.moderate, 150.0);

    let inputs = resolved.inputs.resolve();
    assert_eq!(inputs.maturity_level, MaturityLevel::Optimized);
    assert_eq!(inputs.cost_per_downtime_day, 200_000.0);

    let report = assess(&inputs, &resolved.thresholds, &resolved.display).unwrap();
    assert!(report.loss_exposure.is_some());
    assert!(report.cost_vs_reduction.is_some());

    let json: serde_json::Value = serde_json::from_str(&render_json(&report)).unwrap();
    assert_eq!(json["inputs"]["maturity_level"], "Optimized");
    assert!(json["loss_exposure"]["before"]["amount"].is_number());
}

#[test]
fn test_invalid_thresholds_fixture_is_rejected() {
    let err = load_config_file(&fixture_path("invalid-thresholds.json")).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("invalid config in"), "{}", message);
    assert!(message.contains("thresholds.moderate"), "{}", message);
}

#[test]
fn test_invalid_maturity_fixture_is_rejected() {
    let err = load_config_file(&fixture_path("invalid-maturity.json")).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("failed to parse config file"), "{}", message);
    assert!(message.contains("invalid maturity level"), "{}", message);
}

#[test]
fn test_missing_config_file_reports_path() {
    let path = fixture_path("does-not-exist.json");
    let err = config::load_config_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read config file"));
}
