use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,

    /// One JSON document per command.
    Json,
}

/// Output formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places used when printing decibel values.
    pub decibel_precision: usize,

    /// Decimal places used when printing balance values.
    pub balance_precision: usize,

    /// Output format of command results.
    pub output: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decibel_precision: 2,
            balance_precision: 2,
            output: OutputFormat::Text,
        }
    }
}
