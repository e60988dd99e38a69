//! Command-line interface for the volume arithmetic.
//!
//! Provides a two-level command system (`<category> <command>`) over the
//! volume, balance and diagnostics operations. Commands are organized by
//! category and help text is generated from their metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::{CliService, HELP};
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
