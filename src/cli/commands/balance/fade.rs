use std::sync::Arc;

use crate::{
    channel::Axis,
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command reading the rear/front fade of a channel volume.
///
/// Negative values lean towards the rear speakers.
pub struct FadeGetCommand {
    config: Arc<Config>,
}

impl FadeGetCommand {
    /// Creates a new FadeGetCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for FadeGetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        super::read(&self.config, args, Axis::REAR_FRONT)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "fade-get".to_string(),
            description: "Get rear/front fade".to_string(),
            category: "balance".to_string(),
            args: super::map_and_volume_args(),
            examples: vec![
                "softvol balance fade-get surround-40 100%,100%,50%,50%".to_string(),
            ],
        }
    }
}

/// Command attenuating the rear or front speakers to reach a fade.
pub struct FadeSetCommand {
    config: Arc<Config>,
}

impl FadeSetCommand {
    /// Creates a new FadeSetCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for FadeSetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        super::apply(&self.config, args, Axis::REAR_FRONT, "fade")
    }

    fn metadata(&self) -> CommandMetadata {
        let mut args = super::map_and_volume_args();
        args.push(super::target_arg("fade"));

        CommandMetadata {
            name: "fade-set".to_string(),
            description: "Set rear/front fade".to_string(),
            category: "balance".to_string(),
            args,
            examples: vec![
                "softvol balance fade-set surround-51 1.0,1.0,1.0,1.0,1.0,1.0 -0.25".to_string(),
            ],
        }
    }
}
