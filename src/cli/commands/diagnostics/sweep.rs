use std::sync::Arc;

use crate::{
    cli::{
        Command, CommandResult,
        commands::render,
        formatting::{format_header, format_verdict},
        types::CommandMetadata,
    },
    config::Config,
    diagnostics,
};

/// Command running the conversion and balance sweeps with the parameters
/// from the `[diagnostics]` config section.
///
/// The sweep over the default grid takes a few seconds in debug builds.
pub struct SweepCommand {
    config: Arc<Config>,
}

impl SweepCommand {
    /// Creates a new SweepCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl Command for SweepCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let report = diagnostics::run(&self.config.diagnostics);

        render(&self.config, &report, || {
            format!(
                "{}\n{}\n{}",
                format_header("Volume arithmetic sweep"),
                report.summary(),
                format_verdict(report.passed())
            )
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "sweep".to_string(),
            description: "Check conversion round trips, multiplication and balance".to_string(),
            category: "diagnostics".to_string(),
            args: vec![],
            examples: vec!["softvol diagnostics sweep".to_string()],
        }
    }
}
