use schemars::schema_for;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command printing the JSON schema of the configuration file.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(Config);
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema of config.toml".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["softvol config schema > softvol.schema.json".to_string()],
        }
    }
}
