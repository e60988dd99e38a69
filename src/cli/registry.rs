use std::{collections::HashMap, sync::Arc};

use crate::config::Config;

use super::{
    CliError, Command,
    commands::{balance, config, diagnostics, volume},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped by category so that dispatch is a two-level lookup
/// instead of one large match.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── volume
/// │   ├── show
/// │   ├── multiply
/// │   └── divide
/// ├── balance
/// │   ├── get
/// │   ├── set
/// │   ├── fade-get
/// │   └── fade-set
/// ├── diagnostics
/// │   └── sweep
/// └── config
///     ├── show
///     └── schema
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    config: Arc<Config>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands must be added with `register_command` or
    /// `register_all_commands`.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            categories: HashMap::new(),
            config,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's name from its metadata is used as the key within the
    /// category. An existing command with the same name is replaced.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to register the command under (e.g., "volume", "balance")
    /// * `command` - The command implementation to register
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use softvol::{
    ///     cli::{Command, CommandMetadata, CommandRegistry, CommandResult},
    ///     config::Config,
    /// };
    ///
    /// struct Ping;
    ///
    /// impl Command for Ping {
    ///     fn execute(&self, _args: &[String]) -> CommandResult {
    ///         Ok("pong".to_string())
    ///     }
    ///
    ///     fn metadata(&self) -> CommandMetadata {
    ///         CommandMetadata {
    ///             name: "ping".to_string(),
    ///             description: "Reply with pong".to_string(),
    ///             args: Vec::new(),
    ///             examples: Vec::new(),
    ///             category: "debug".to_string(),
    ///         }
    ///     }
    /// }
    ///
    /// let mut registry = CommandRegistry::new(Arc::new(Config::default()));
    /// registry.register_command("debug", Box::new(Ping));
    /// assert_eq!(registry.execute("debug", "ping", &[]).unwrap(), "pong");
    /// ```
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// The argument count is checked against the command's metadata before
    /// the command runs; parsing the values is left to the command.
    ///
    /// # Arguments
    ///
    /// * `category` - The category containing the command
    /// * `command_name` - The name of the command to execute
    /// * `args` - Arguments to pass to the command
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or the command
    /// within it doesn't exist, `CliError::InvalidArguments` if the argument
    /// count doesn't match the command's metadata. Other errors come from
    /// the command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in category '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Returns a vector of tuples where each tuple contains:
    /// - Category name
    /// - Vector of command names within that category
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Metadata of a single command, if registered
    pub fn metadata(&self, category: &str, command_name: &str) -> Option<CommandMetadata> {
        self.categories
            .get(category)?
            .get(command_name)
            .map(|command| command.metadata())
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    ///
    /// Each category module registers its own commands, sharing the
    /// registry's configuration.
    pub fn register_all_commands(&mut self) {
        volume::register_commands(self, self.config.clone());
        balance::register_commands(self, self.config.clone());
        diagnostics::register_commands(self, self.config.clone());
        config::register_commands(self, self.config.clone());
    }
}
