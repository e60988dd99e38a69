use std::sync::Arc;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command printing the effective configuration as TOML.
///
/// Values missing from the config file are shown with their defaults.
pub struct ShowCommand {
    config: Arc<Config>,
}

impl ShowCommand {
    /// Creates a new ShowCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for ShowCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        self.config
            .to_toml_string()
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show the effective configuration".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["softvol config show".to_string()],
        }
    }
}
