//! Unit tests for config module
//!
//! Tests configuration types, defaults, validation and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::{
    SoftvolError,
    config::{Config, DiagnosticsConfig, LogLevel, OutputFormat},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.display.decibel_precision, 2);
    assert_eq!(config.display.output, OutputFormat::Text);
    assert_eq!(config.diagnostics, DiagnosticsConfig::default());
    assert_eq!(config.diagnostics.max_mismatches, 253);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = config.to_toml_string().unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[display]"));
    assert!(toml_str.contains("[diagnostics]"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [display]
        output = "json"

        [diagnostics]
        round_trip_step = 1
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.display.output, OutputFormat::Json);
    assert_eq!(config.display.decibel_precision, 2);
    assert_eq!(config.diagnostics.round_trip_step, 1);
    assert_eq!(config.diagnostics.multiply_step_b, 37);
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = Config::default();
    original.display.balance_precision = 4;

    let toml_str = original.to_toml_string().unwrap();
    let deserialized = Config::from_toml_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [general
        invalid syntax here
    "#;

    let result = Config::from_toml_str(invalid_toml);

    assert!(matches!(
        result,
        Err(SoftvolError::TomlParseError { ref location, .. }) if location == "string"
    ));
}

#[test]
fn config_unknown_log_level() {
    let result = Config::from_toml_str("[general]\nlog_level = \"loud\"");
    assert!(result.is_err());
}

#[test]
fn config_zero_step_is_rejected() {
    let result = Config::from_toml_str("[diagnostics]\nmultiply_step_a = 0");

    assert!(matches!(
        result,
        Err(SoftvolError::ConfigValidation { ref component, .. }) if component == "diagnostics"
    ));
}

#[test]
fn config_huge_precision_is_rejected() {
    let result = Config::from_toml_str("[display]\ndecibel_precision = 40");
    assert!(result.is_err());
}

#[test]
fn config_unknown_fields() {
    let toml_with_unknown = r#"
        [general]
        log_level = "info"
        unknown_field = "should be ignored"

        [unknown_section]
        some_field = "ignored"
    "#;

    let config = Config::from_toml_str(toml_with_unknown).unwrap();
    assert_eq!(config.general.log_level, LogLevel::Info);
}

#[test]
fn log_level_display_matches_serde_name() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let serialized = serde_json::to_string(&level).unwrap();
        assert_eq!(serialized, format!("\"{level}\""));
    }
}
