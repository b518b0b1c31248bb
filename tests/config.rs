use std::path::PathBuf;

use mimosa_energy::{ColorScheme, DashboardConfig, DashboardError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mimosa_energy_{}_{}", std::process::id(), name))
}

fn customized() -> DashboardConfig {
    let mut cfg = DashboardConfig::default();
    cfg.simulation.custom_plant_count = 25;
    cfg.simulation.seed = Some(7);
    cfg.battery.capacity = 250.0;
    cfg.window.title = "Greenhouse".to_string();
    cfg.color_scheme = ColorScheme::Light;
    cfg
}

#[test]
fn yaml_file_round_trip() {
    let path = temp_path("cfg.yaml");
    let cfg = customized();
    cfg.save(&path).unwrap();
    let loaded = DashboardConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, cfg);
}

#[test]
fn json_file_round_trip() {
    let path = temp_path("cfg.json");
    let cfg = customized();
    cfg.save(&path).unwrap();
    let loaded = DashboardConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, cfg);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = temp_path("cfg.toml");
    let err = DashboardConfig::default().save(&path).unwrap_err();
    assert!(matches!(err, DashboardError::UnsupportedConfigFormat(_)));
    assert!(!path.exists());
}

#[test]
fn missing_file_reports_path() {
    let path = temp_path("does_not_exist.yaml");
    match DashboardConfig::load(&path) {
        Err(DashboardError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn partial_yaml_keeps_defaults() {
    let cfg = DashboardConfig::from_yaml_str(
        "simulation:\n  custom_plant_count: 12\ncolor_scheme: light\n",
    )
    .unwrap();
    assert_eq!(cfg.simulation.custom_plant_count, 12);
    assert_eq!(cfg.simulation.baseline_energy, 0.5);
    assert_eq!(cfg.simulation.update_interval_ms, 1000);
    assert_eq!(cfg.battery, DashboardConfig::default().battery);
    assert_eq!(cfg.color_scheme, ColorScheme::Light);
}

#[test]
fn malformed_json_is_an_error() {
    let err = DashboardConfig::from_json_str("{ \"simulation\": ").unwrap_err();
    assert!(matches!(err, DashboardError::Json(_)));
}
