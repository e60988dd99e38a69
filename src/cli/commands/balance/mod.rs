//! Balance and fade commands over a channel map and channel volume.
mod fade;
mod get;
mod set;

use std::sync::Arc;

pub use fade::{FadeGetCommand, FadeSetCommand};
pub use get::GetCommand;
use serde::Serialize;
pub use set::SetCommand;

use crate::{
    channel::{Axis, ChannelVolume, get_axis_balance, set_axis_balance},
    cli::{
        CommandRegistry, CommandResult,
        commands::{parse_balance, parse_map, parse_volumes, render, required},
        formatting::format_fields,
        types::{ArgType, CommandArg},
    },
    config::Config,
};

/// Registers all balance commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config` - Shared configuration for output formatting
pub fn register_commands(registry: &mut CommandRegistry, config: Arc<Config>) {
    const CATEGORY_NAME: &str = "balance";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(config.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(config.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(FadeGetCommand::new(config.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(FadeSetCommand::new(config)));
}

#[derive(Debug, Serialize)]
struct BalanceOutput {
    map: String,
    volumes: ChannelVolume,
    balance: f64,
}

fn map_and_volume_args() -> Vec<CommandArg> {
    vec![
        CommandArg {
            name: "map".to_string(),
            description: "Channel map, a shortcut or comma-separated positions".to_string(),
            required: true,
            value_type: ArgType::ChannelMap,
        },
        CommandArg {
            name: "volumes".to_string(),
            description: "One volume per channel of the map".to_string(),
            required: true,
            value_type: ArgType::VolumeList,
        },
    ]
}

fn target_arg(name: &str) -> CommandArg {
    CommandArg {
        name: name.to_string(),
        description: format!("Target {name}, -1.0 to 1.0"),
        required: true,
        value_type: ArgType::Balance,
    }
}

/// Read the balance along `axis` of the map and volumes in `args`
fn read(config: &Config, args: &[String], axis: Axis) -> CommandResult {
    let map = parse_map("map", required(args, 0, "map")?)?;
    let volumes = parse_volumes("volumes", required(args, 1, "volumes")?)?;

    let balance = get_axis_balance(&volumes, &map, axis)?;
    let output = BalanceOutput {
        map: map.to_string(),
        volumes,
        balance: balance.get(),
    };

    render(config, &output, || {
        format!("{:.precision$}", balance, precision = config.display.balance_precision)
    })
}

/// Apply the balance in `args[2]` along `axis` and print the new volumes
fn apply(config: &Config, args: &[String], axis: Axis, target: &str) -> CommandResult {
    let map = parse_map("map", required(args, 0, "map")?)?;
    let volumes = parse_volumes("volumes", required(args, 1, "volumes")?)?;
    let wanted = parse_balance(target, required(args, 2, target)?)?;

    let balanced = set_axis_balance(&volumes, &map, axis, wanted)?;
    let balance = get_axis_balance(&balanced, &map, axis)?;
    let output = BalanceOutput {
        map: map.to_string(),
        volumes: balanced,
        balance: balance.get(),
    };

    let per_channel = balanced.display_with_map(&map)?;
    render(config, &output, || {
        format_fields(&[
            ("volumes", per_channel),
            (
                target,
                format!("{:.precision$}", balance, precision = config.display.balance_precision),
            ),
        ])
    })
}
