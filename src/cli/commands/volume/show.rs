use std::sync::Arc;

use super::VolumeSummary;
use crate::{
    cli::{
        Command, CommandResult,
        commands::{parse_volume, render, required},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
};

/// Command printing a volume in every representation.
///
/// # Example Usage
///
/// ```bash
/// softvol volume show 50%
/// softvol volume show -6dB
/// softvol volume show '#65536'
/// ```
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
    fn execute(&self, args: &[String]) -> CommandResult {
        let volume = parse_volume("volume", required(args, 0, "volume")?)?;
        let summary = VolumeSummary::new(volume);

        render(&self.config, &summary, || {
            summary.to_text(self.config.display.decibel_precision)
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show a volume as raw value, percent, linear factor and decibels"
                .to_string(),
            category: "volume".to_string(),
            args: vec![CommandArg {
                name: "volume".to_string(),
                description: "Volume to convert".to_string(),
                required: true,
                value_type: ArgType::Volume,
            }],
            examples: vec![
                "softvol volume show 50%".to_string(),
                "softvol volume show -6dB".to_string(),
                "softvol volume show 0.125".to_string(),
            ],
        }
    }
}
