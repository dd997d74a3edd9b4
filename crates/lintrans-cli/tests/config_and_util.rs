//! Integration tests for CLI config loading and util helpers.

use std::path::{Path, PathBuf};

use lintrans::config::{LabConfig, TransformKind};
use lintrans_cli::commands::config_block;
use lintrans_cli::util::{ensure_dir, validate_csv_file, write_json};

// ---------------------------------------------------------------------------
// Point file checks
// ---------------------------------------------------------------------------

#[test]
fn point_file_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("house.CSV");
    std::fs::write(&path, "x,y\n0,0\n").unwrap();
    assert!(validate_csv_file(&path).is_ok());
}

#[test]
fn point_file_extension_is_checked_before_existence() {
    let err = validate_csv_file(Path::new("/nonexistent/house.txt")).unwrap_err();
    assert!(err.to_string().contains(".csv extension"), "{}", err);

    let err = validate_csv_file(Path::new("/nonexistent/house.csv")).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{}", err);
}

// ---------------------------------------------------------------------------
// Report configuration block
// ---------------------------------------------------------------------------

#[test]
fn config_block_escapes_user_strings() {
    let mut config = LabConfig::default();
    config.transform.points = Some(PathBuf::from("a<i>x.csv"));
    let html = config_block(&config.transform).unwrap().into_string();
    assert!(!html.contains("<i>"));
    assert!(html.contains("a&lt;i&gt;x.csv"));
}

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

#[test]
fn ensure_dir_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn config_json_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = LabConfig::default();
    config.benchmark.max_exponent = 5;
    config.transform.kind = TransformKind::Shear;
    write_json(&path, &config).unwrap();

    let loaded = LabConfig::from_file(&path).unwrap();
    assert_eq!(loaded.benchmark.max_exponent, 5);
    assert_eq!(loaded.transform.kind, TransformKind::Shear);
    assert_eq!(loaded.orbit, config.orbit);
}

// ---------------------------------------------------------------------------
// LabConfig defaults
// ---------------------------------------------------------------------------

#[test]
fn lab_config_default_values() {
    let config = LabConfig::default();
    assert_eq!(config.benchmark.max_exponent, 8);
    assert!(!config.benchmark.vectorized);
    assert_eq!(config.orbit.steps, 400);
    assert_eq!(config.orbit.omega_moon, 13.0);
    assert_eq!(config.animation.interval_ms, 25);
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(LabConfig::from_file(&path).is_err());
}
