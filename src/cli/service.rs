use std::sync::Arc;

use tracing::debug;

use crate::config::Config;

use super::{
    CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
};

/// Pseudo-category that prints usage instead of running a command
pub const HELP: &str = "help";

/// High-level service for managing and executing CLI commands.
///
/// Owns the command registry and answers `help` requests from the
/// registered commands' metadata.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// The configuration is shared by every command that renders output or
    /// runs the diagnostic sweep.
    pub fn new(config: Config) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(config));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help` lists every command; `help <category>` or a category without
    /// a command describes the commands of that category.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the
    /// category, or any error reported by the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        debug!(category, command = command_name, ?args, "executing command");

        if category == HELP {
            return match command_name {
                "" => Ok(self.help()),
                category => self.category_help(category),
            };
        }
        if command_name.is_empty() {
            return self.category_help(category);
        }

        self.registry.execute(category, command_name, args)
    }

    /// Lists all available commands organized by category.
    ///
    /// # Returns
    /// Vector of (category_name, command_names) tuples
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    fn help(&self) -> String {
        let mut lines = vec![
            format_header("softvol - software volume arithmetic"),
            String::new(),
            format!(
                "{} softvol <category> <command> [args...]",
                format_subheader("Usage:")
            ),
            String::new(),
        ];

        for (category, commands) in self.list_all() {
            lines.push(format_category(&category));
            for name in commands {
                let description = self
                    .registry
                    .metadata(&category, &name)
                    .map(|metadata| metadata.description)
                    .unwrap_or_default();
                lines.push(format!(
                    "  {:<12} {}",
                    format_command(&name),
                    format_description(&description)
                ));
            }
        }

        lines.push(String::new());
        lines.push(format_usage("Run 'softvol help <category>' for details."));
        lines.join("\n")
    }

    fn category_help(&self, category: &str) -> Result<String, CliError> {
        let (_, commands) = self
            .list_all()
            .into_iter()
            .find(|(name, _)| name == category)
            .ok_or_else(|| {
                CliError::CommandNotFound(format!("Failed to find category '{category}'"))
            })?;

        let mut lines = vec![format_header(category)];
        for metadata in commands
            .iter()
            .filter_map(|name| self.registry.metadata(category, name))
        {
            let usage: Vec<String> = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect();

            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                format_command(&format!("{category} {}", metadata.name)),
                usage.join(" ")
            ));
            lines.push(format!("  {}", format_description(&metadata.description)));

            for arg in &metadata.args {
                lines.push(format!(
                    "  {:<10} {} ({})",
                    arg.name,
                    arg.description,
                    arg.value_type.hint()
                ));
            }
            for example in &metadata.examples {
                lines.push(format!("  {}", format_usage(example)));
            }
        }

        Ok(lines.join("\n"))
    }
}
