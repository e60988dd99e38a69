use std::sync::Arc;

use super::VolumeSummary;
use crate::{
    cli::{
        Command, CommandResult,
        commands::{parse_volume, render, required},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    volume::divide_volume,
};

/// Command dividing one volume by another, the inverse of `multiply`.
///
/// Dividing by a muted volume yields a muted result.
pub struct DivideCommand {
    config: Arc<Config>,
}

impl DivideCommand {
    /// Creates a new DivideCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for DivideCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let a = parse_volume("a", required(args, 0, "a")?)?;
        let b = parse_volume("b", required(args, 1, "b")?)?;

        let summary = VolumeSummary::new(divide_volume(a, b));

        render(&self.config, &summary, || {
            summary.to_text(self.config.display.decibel_precision)
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "divide".to_string(),
            description: "Divide a volume by another".to_string(),
            category: "volume".to_string(),
            args: vec![
                CommandArg {
                    name: "a".to_string(),
                    description: "Dividend".to_string(),
                    required: true,
                    value_type: ArgType::Volume,
                },
                CommandArg {
                    name: "b".to_string(),
                    description: "Divisor".to_string(),
                    required: true,
                    value_type: ArgType::Volume,
                },
            ],
            examples: vec!["softvol volume divide 25% 50%".to_string()],
        }
    }
}
