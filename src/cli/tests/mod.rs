//! Unit tests for CLI module
//!
//! Tests command registry, dispatch, argument parsing and formatting.
//! Commands run in-process against an in-memory configuration.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::{
    cli::{
        CliError, CliService, CommandRegistry,
        formatting::{Colors, format_fields, format_verdict},
    },
    config::{Config, DiagnosticsConfig, OutputFormat},
    volume::VolumeError,
};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn service() -> CliService {
    CliService::new(Config::default())
}

fn json_service() -> CliService {
    let mut config = Config::default();
    config.display.output = OutputFormat::Json;
    CliService::new(config)
}

#[test]
fn command_registry_starts_empty() {
    let registry = CommandRegistry::new(Arc::new(Config::default()));
    assert!(registry.list_commands().is_empty());
}

#[test]
fn command_registry_lists_sorted_categories() {
    let mut registry = CommandRegistry::new(Arc::new(Config::default()));
    registry.register_all_commands();

    let categories = registry.list_commands();
    let names: Vec<&str> = categories.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["balance", "config", "diagnostics", "volume"]);

    let (_, balance) = &categories[0];
    assert_eq!(balance, &["fade-get", "fade-set", "get", "set"]);
}

#[test]
fn unknown_category_is_reported() {
    let result = service().execute_command("mixer", "show", &[]);
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[test]
fn unknown_command_is_reported() {
    let result = service().execute_command("volume", "add", &args(&["1", "2"]));
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[test]
fn argument_count_is_validated() {
    let service = service();

    let missing = service.execute_command("volume", "multiply", &args(&["50%"]));
    assert!(matches!(missing, Err(CliError::InvalidArguments(_))));

    let extra = service.execute_command("volume", "show", &args(&["50%", "60%"]));
    assert!(matches!(extra, Err(CliError::InvalidArguments(_))));
}

#[test]
fn help_lists_every_category() {
    let help = service().execute_command("help", "", &[]).unwrap();

    for category in ["balance", "config", "diagnostics", "volume"] {
        assert!(help.contains(category), "help misses {category}");
    }
}

#[test]
fn category_help_shows_arguments_and_examples() {
    let service = service();

    let help = service.execute_command("help", "balance", &[]).unwrap();
    assert!(help.contains("<map>"));
    assert!(help.contains("<volumes>"));
    assert!(help.contains("softvol balance set stereo 100%,100% -0.5"));

    let bare = service.execute_command("balance", "", &[]).unwrap();
    assert_eq!(help, bare);
}

#[test]
fn volume_show_text() {
    let output = service()
        .execute_command("volume", "show", &args(&["100%"]))
        .unwrap();

    assert!(output.contains("65536"));
    assert!(output.contains("0.00 dB"));
    assert!(output.contains("1.000000"));
}

#[test]
fn volume_show_muted_has_no_finite_decibels() {
    let output = json_service()
        .execute_command("volume", "show", &args(&["mute"]))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["raw"], 0);
    assert!(value["decibels"].is_null());
}

#[test]
fn volume_multiply_json() {
    let output = json_service()
        .execute_command("volume", "multiply", &args(&["#32768", "#32768"]))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["raw"], 16384);
}

#[test]
fn volume_divide_json() {
    let output = json_service()
        .execute_command("volume", "divide", &args(&["#16384", "#32768"]))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["raw"], 32768);
}

#[test]
fn invalid_volume_names_the_argument() {
    let result = service().execute_command("volume", "show", &args(&["loud"]));

    match result {
        Err(CliError::InvalidArgument { arg, .. }) => assert_eq!(arg, "volume"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn balance_get_text_uses_configured_precision() {
    let mut config = Config::default();
    config.display.balance_precision = 3;
    let service = CliService::new(config);

    let output = service
        .execute_command("balance", "get", &args(&["stereo", "#65536,#16384"]))
        .unwrap();

    assert_eq!(output, "-0.750");
}

#[test]
fn balance_set_json_reports_new_volumes() {
    let output = json_service()
        .execute_command("balance", "set", &args(&["stereo", "#65536,#65536", "0.5"]))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["map"], "front-left,front-right");
    assert_eq!(value["volumes"], serde_json::json!([32768, 65536]));
    assert_eq!(value["balance"], 0.5);
}

#[test]
fn balance_set_rejects_out_of_range_target() {
    let result = service().execute_command("balance", "set", &args(&["stereo", "1.0,1.0", "1.5"]));

    match result {
        Err(CliError::InvalidArgument { arg, .. }) => assert_eq!(arg, "balance"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn balance_with_mismatched_map_is_a_volume_error() {
    let result = service().execute_command("balance", "get", &args(&["stereo", "1.0,1.0,1.0"]));

    assert!(matches!(
        result,
        Err(CliError::Volume(VolumeError::ChannelMapMismatch { volumes: 3, map: 2 }))
    ));
}

#[test]
fn fade_set_attenuates_rear() {
    let output = json_service()
        .execute_command(
            "balance",
            "fade-set",
            &args(&["surround-40", "#65536,#65536,#65536,#65536", "1.0"]),
        )
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["volumes"], serde_json::json!([65536, 65536, 0, 0]));
    assert_eq!(value["balance"], 1.0);
}

#[test]
fn diagnostics_sweep_with_coarse_steps() {
    let config = Config {
        diagnostics: DiagnosticsConfig {
            round_trip_step: 4099,
            multiply_step_a: 8191,
            multiply_step_b: 8209,
            balance_step: 32768,
            max_mismatches: u64::MAX,
        },
        display: crate::config::DisplayConfig {
            output: OutputFormat::Json,
            ..Default::default()
        },
        ..Default::default()
    };

    let output = CliService::new(config)
        .execute_command("diagnostics", "sweep", &[])
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["round_trip"]["linear_failures"], 0);
    assert_eq!(value["round_trip"]["db_failures"], 0);
    assert_eq!(value["multiplication"]["identity_failures"], 0);
    assert_eq!(value["balance"]["out_of_tolerance"], 0);
}

#[test]
fn config_show_prints_toml() {
    let output = service().execute_command("config", "show", &[]).unwrap();

    let parsed = Config::from_toml_str(&output).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn config_schema_is_json() {
    let output = service().execute_command("config", "schema", &[]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(value["properties"]["diagnostics"].is_object());
}

#[test]
fn format_fields_aligns_values() {
    let text = format_fields(&[
        ("a", "1".to_string()),
        ("long label", "2".to_string()),
    ]);

    assert_eq!(text, "a:          1\nlong label: 2");
}

#[test]
fn format_verdict_colors() {
    assert!(format_verdict(true).contains(Colors::GREEN));
    assert!(format_verdict(false).contains(Colors::RED));
}
