use std::sync::Arc;

use crate::{
    channel::Axis,
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command reading the left/right balance of a channel volume.
///
/// # Example Usage
///
/// ```bash
/// softvol balance get stereo 100%,50%
/// softvol balance get surround-51 100%,100%,80%,80%,100%,100%
/// ```
pub struct GetCommand {
    config: Arc<Config>,
}

impl GetCommand {
    /// Creates a new GetCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for GetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        super::read(&self.config, args, Axis::LEFT_RIGHT)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get left/right balance".to_string(),
            category: "balance".to_string(),
            args: super::map_and_volume_args(),
            examples: vec![
                "softvol balance get stereo 100%,50%".to_string(),
                "softvol balance get front-left,front-right,lfe 1.0,0.5,1.0".to_string(),
            ],
        }
    }
}
