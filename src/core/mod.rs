use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::volume::VolumeError;

/// Error types for the softvol crate.
///
/// Covers configuration loading and validation on top of the volume
/// domain errors, which are wrapped unchanged.
#[derive(Error, Debug)]
pub enum SoftvolError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Volume domain error
    #[error("volume error: {0}")]
    Volume(#[from] VolumeError),
}

/// A specialized `Result` type for softvol operations.
pub type Result<T> = result::Result<T, SoftvolError>;

impl SoftvolError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        SoftvolError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a validation error for a config component.
    pub fn validation(component: &str, details: impl fmt::Display) -> Self {
        SoftvolError::ConfigValidation {
            component: component.to_string(),
            details: details.to_string(),
        }
    }
}
