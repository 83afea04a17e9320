//! Unit tests for the config module
//!
//! Tests cover:
//! - Config defaults
//! - TOML loading from files
//! - Validation failures

use ringfifo::config::{Config, LogFormat, MAX_CAPACITY};
use ringfifo::Variant;
use std::io::Write;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[buffer]
capacity = 32
variant = "linked"

[logging]
format = "json"
"#
    )
    .unwrap();
    let config = Config::load_with(file.path().to_str(), no_env).unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_rejects_capacity_above_limit() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[buffer]\ncapacity = {}", MAX_CAPACITY + 1).unwrap();
    let err = Config::load_with(file.path().to_str(), no_env).unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"));
}

#[test]
fn test_load_rejects_negative_capacity() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[buffer]\ncapacity = -4").unwrap();
    assert!(Config::load_with(file.path().to_str(), no_env).is_err());
}

#[test]
fn test_to_toml_contains_sections() {
    let mut config = Config::default();
    config.buffer.variant = Variant::Linked;
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("[buffer]"));
    assert!(rendered.contains("variant = \"linked\""));
    assert!(rendered.contains("[logging]"));
}
