// Configuration tests
// Author: Gabriel Demetrios Lafis

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use rfp_mapper::utils::{missing_columns, Config, ConfigError};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.input.path, PathBuf::from("data").join("rfps.csv"));
    assert_eq!(config.output.dir, PathBuf::from("data").join("mapped"));
    assert_eq!(config.delimiter_byte().unwrap(), b',');
    assert!(!config.mapping.strict_headers);
    assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
}

#[test]
fn test_partial_json_config_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"output": {"dir": "/tmp/out"}, "logging": {"level": "DEBUG"}}"#).unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.output.dir, PathBuf::from("/tmp/out"));
    assert_eq!(config.input.path, PathBuf::from("data").join("rfps.csv"));
    assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_yaml_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(
        &path,
        "input:\n  path: in/requests.csv\n  delimiter: ';'\nmapping:\n  strict_headers: true\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.input.path, PathBuf::from("in/requests.csv"));
    assert_eq!(config.delimiter_byte().unwrap(), b';');
    assert!(config.mapping.strict_headers);
    assert_eq!(config.output.dir, PathBuf::from("data").join("mapped"));
}

#[test]
fn test_unsupported_config_format() {
    let result = Config::from_file("settings.toml");

    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();

    let result = Config::from_file(dir.path().join("absent.json"));

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_non_ascii_delimiter_rejected() {
    let mut config = Config::default();
    config.input.delimiter = '；';

    assert!(matches!(
        config.delimiter_byte(),
        Err(ConfigError::InvalidDelimiter('；'))
    ));
}

#[test]
fn test_missing_columns() {
    let headers = vec!["Course Name".to_string(), "Location".to_string()];

    let missing = missing_columns(&headers, &["Company/Organization", "Course Name", "Location", "Budget (KRW)"]);

    assert_eq!(missing, vec!["Company/Organization", "Budget (KRW)"]);
}
