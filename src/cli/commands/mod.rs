//! Command implementations, one module per category.

pub mod balance;
pub mod config;
pub mod diagnostics;
pub mod volume;

use serde::Serialize;

use crate::{
    channel::{Balance, ChannelMap, ChannelVolume},
    cli::{CliError, CommandResult},
    config::{Config, OutputFormat},
    volume::Volume,
};

/// Render `value` as JSON or run `text` depending on the configured output
pub(crate) fn render<T, F>(config: &Config, value: &T, text: F) -> CommandResult
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match config.display.output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text()),
    }
}

pub(crate) fn parse_volume(arg: &str, input: &str) -> Result<Volume, CliError> {
    input.parse().map_err(|e| CliError::InvalidArgument {
        arg: arg.to_string(),
        reason: format!("{e}"),
    })
}

pub(crate) fn parse_volumes(arg: &str, input: &str) -> Result<ChannelVolume, CliError> {
    let volumes = input
        .split(',')
        .map(|part| parse_volume(arg, part.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChannelVolume::from_slice(&volumes)?)
}

pub(crate) fn parse_map(arg: &str, input: &str) -> Result<ChannelMap, CliError> {
    input.parse().map_err(|e| CliError::InvalidArgument {
        arg: arg.to_string(),
        reason: format!("{e}"),
    })
}

pub(crate) fn parse_balance(arg: &str, input: &str) -> Result<Balance, CliError> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidArgument {
            arg: arg.to_string(),
            reason: format!("'{input}' is not a number"),
        })?;

    Balance::new(value).map_err(|e| CliError::InvalidArgument {
        arg: arg.to_string(),
        reason: format!("{e}"),
    })
}

pub(crate) fn required<'a>(
    args: &'a [String],
    index: usize,
    name: &str,
) -> Result<&'a str, CliError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CliError::InvalidArguments(format!("Expected <{name}> argument")))
}
