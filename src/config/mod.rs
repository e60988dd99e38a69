//! Configuration schema definitions and validation.
//!
//! Defines the configuration for the softvol command-line tools: logging,
//! output formatting and the parameters of the diagnostic sweep. All
//! sections are serializable to/from TOML and default when absent.

mod diagnostics;
mod display;
mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use diagnostics::DiagnosticsConfig;
pub use display::{DisplayConfig, OutputFormat};
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for softvol.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Output formatting.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Diagnostic sweep parameters.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}
