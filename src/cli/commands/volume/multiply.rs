use std::sync::Arc;

use super::VolumeSummary;
use crate::{
    cli::{
        Command, CommandResult,
        commands::{parse_volume, render, required},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    volume::multiply_volume,
};

/// Command multiplying two volumes as cascaded gains.
pub struct MultiplyCommand {
    config: Arc<Config>,
}

impl MultiplyCommand {
    /// Creates a new MultiplyCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for MultiplyCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let a = parse_volume("a", required(args, 0, "a")?)?;
        let b = parse_volume("b", required(args, 1, "b")?)?;

        let summary = VolumeSummary::new(multiply_volume(a, b));

        render(&self.config, &summary, || {
            summary.to_text(self.config.display.decibel_precision)
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "multiply".to_string(),
            description: "Multiply two volumes".to_string(),
            category: "volume".to_string(),
            args: vec![
                CommandArg {
                    name: "a".to_string(),
                    description: "First volume".to_string(),
                    required: true,
                    value_type: ArgType::Volume,
                },
                CommandArg {
                    name: "b".to_string(),
                    description: "Second volume".to_string(),
                    required: true,
                    value_type: ArgType::Volume,
                },
            ],
            examples: vec![
                "softvol volume multiply 50% 50%".to_string(),
                "softvol volume multiply -6dB -6dB".to_string(),
            ],
        }
    }
}
