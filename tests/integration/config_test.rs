//! Config file round trips through the filesystem

use std::fs;

use npt::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("npt").join("config.toml");

    let mut config = Config::default();
    config.session.seed = Some(2024);
    config.session.speed = 2.5;
    config.display.ascii_only = true;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\ntheme = \"ocean\"\nsparkles = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.theme, "ocean");
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[session\nseed = 1\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn default_config_file_omits_unset_options() {
    let text = Config::default().to_toml().unwrap();
    assert!(text.contains("[session]"));
    assert!(text.contains("[display]"));
    assert!(text.contains("[portal]"));
    assert!(text.contains("[logging]"));
    // Optional values are omitted rather than written as empty
    assert!(!text.contains("seed"));
}
