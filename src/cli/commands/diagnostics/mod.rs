//! Self-check commands for the volume arithmetic.
mod sweep;

use std::sync::Arc;

pub use sweep::SweepCommand;

use crate::{cli::CommandRegistry, config::Config};

/// Registers all diagnostics commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config` - Shared configuration holding the sweep parameters
pub fn register_commands(registry: &mut CommandRegistry, config: Arc<Config>) {
    const CATEGORY_NAME: &str = "diagnostics";

    registry.register_command(CATEGORY_NAME, Box::new(SweepCommand::new(config)));
}
