//! Error types for phspmerge

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for phspmerge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for phspmerge
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String, help: String },

    /// Build error
    #[error("Build error: {message}")]
    Build { message: String, help: String },

    /// No matching input files were found
    #[error("{message}")]
    NoInputs { message: String, help: String },

    /// Merge execution error
    #[error("Merge error: {message}")]
    Merge { message: String, help: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Create a build error
    pub fn build(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Create a no-inputs error
    pub fn no_inputs(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::NoInputs {
            message: message.into(),
            help: help.into(),
        }
    }

    /// Create a merge error
    pub fn merge(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Merge {
            message: message.into(),
            help: help.into(),
        }
    }
}
