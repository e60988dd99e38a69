use std::sync::Arc;

use crate::{
    channel::Axis,
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command attenuating the left or right side to reach a balance.
///
/// The louder side keeps its volume, channels that are neither left nor
/// right are untouched.
pub struct SetCommand {
    config: Arc<Config>,
}

impl SetCommand {
    /// Creates a new SetCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for SetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        super::apply(&self.config, args, Axis::LEFT_RIGHT, "balance")
    }

    fn metadata(&self) -> CommandMetadata {
        let mut args = super::map_and_volume_args();
        args.push(super::target_arg("balance"));

        CommandMetadata {
            name: "set".to_string(),
            description: "Set left/right balance".to_string(),
            category: "balance".to_string(),
            args,
            examples: vec![
                "softvol balance set stereo 100%,100% -0.5".to_string(),
                "softvol balance set surround-40 80%,80%,80%,80% 1.0".to_string(),
            ],
        }
    }
}
