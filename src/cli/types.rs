use thiserror::Error;

use crate::volume::VolumeError;

/// Errors that can occur during CLI command execution.
///
/// Covers command lookup, argument validation and failures reported by
/// the volume arithmetic itself.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    ///
    /// This occurs when the category is unknown or the command name does
    /// not exist within a valid category.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The number of arguments does not match the command's metadata.
    ///
    /// Returned by the registry before the command runs, and by commands
    /// when a required positional argument is missing.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A single argument could not be interpreted.
    ///
    /// Names the argument so that, for example, a malformed volume in
    /// `volume multiply` says which operand was wrong.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// The arguments were well formed but violate a volume invariant,
    /// e.g. a channel map and channel volume of different sizes.
    #[error(transparent)]
    Volume(#[from] VolumeError),

    /// An error occurred in the configuration system.
    ///
    /// Wraps failures to render or describe the configuration, such as TOML
    /// serialization errors.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Result could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O operation failed.
    ///
    /// Converts automatically from `std::io::Error`.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return their rendered output on success, as text or
/// JSON depending on the configured output format, or a `CliError`
/// describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Drives argument count validation in the registry and the argument list
/// printed by `softvol help <category>`.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "volume", "map").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
///
/// Only used for help text: each variant has a short placeholder telling
/// the user what kind of value is expected.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A volume such as `50%`, `-6dB`, `0.5` or `#32768`.
    Volume,

    /// Comma-separated volumes, one per channel.
    VolumeList,

    /// A channel map such as `stereo` or `front-left,front-right,lfe`.
    ChannelMap,

    /// A number in `[-1.0, 1.0]`.
    Balance,
}

impl ArgType {
    /// Short placeholder shown in help text
    pub fn hint(&self) -> &'static str {
        match self {
            ArgType::Volume => "volume",
            ArgType::VolumeList => "v1,v2,...",
            ArgType::ChannelMap => "map",
            ArgType::Balance => "-1.0..1.0",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// Used for help generation, argument count validation and command
/// discovery.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "show", "set").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "volume", "balance").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors, usually
/// a shared `Arc<Config>`, and are registered in a `CommandRegistry` under
/// a category.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata; the command parses the values itself.
    ///
    /// # Arguments
    ///
    /// * `args` - Positional arguments in the order given by the metadata
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `CliError::InvalidArgument` if a value cannot be parsed
    /// - `CliError::Volume` if the operation violates a volume invariant
    /// - `CliError::Serialization` if JSON output cannot be rendered
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
