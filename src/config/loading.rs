use std::{fs, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{Result, SoftvolError};

const MAX_PRECISION: usize = 12;

impl Config {
    /// Loads the configuration from the default location
    ///
    /// A missing file is not an error: the defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined,
    /// or if the file exists but cannot be read, parsed or validated.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`, falling back to defaults if the
    /// file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The TOML content is invalid
    /// - A value fails validation
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SoftvolError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse(&content, Some(path))
    }

    /// Parses and validates configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value fails validation.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Self::parse(content, None)
    }

    /// Serializes the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SoftvolError::validation("config", e))
    }

    /// Checks values that deserialize fine but make no sense
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        let diagnostics = &self.diagnostics;
        let steps = [
            ("round_trip_step", diagnostics.round_trip_step),
            ("multiply_step_a", diagnostics.multiply_step_a),
            ("multiply_step_b", diagnostics.multiply_step_b),
            ("balance_step", diagnostics.balance_step),
        ];

        for (name, step) in steps {
            if step == 0 {
                return Err(SoftvolError::validation(
                    "diagnostics",
                    format!("{name} must be greater than 0"),
                ));
            }
        }

        let display = &self.display;
        if display.decibel_precision > MAX_PRECISION || display.balance_precision > MAX_PRECISION {
            return Err(SoftvolError::validation(
                "display",
                format!("precision must be at most {MAX_PRECISION}"),
            ));
        }

        Ok(())
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| SoftvolError::toml_parse(e, path))?;
        config.validate()?;
        Ok(config)
    }
}
