//! Configuration file parsing
//!
//! This module handles parsing of the optional `phspmerge.toml` file. Every
//! field has a default matching the Geant4phspMerger conventions, so a
//! missing file yields a fully usable configuration.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Main configuration structure for phspmerge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Merger settings
    pub merger: MergerConfig,

    /// Build settings
    pub build: BuildConfig,
}

/// Merger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergerConfig {
    /// Merger project directory name, resolved relative to this program's
    /// own location unless overridden (default: "Geant4phspMerger")
    pub project_dir: Utf8PathBuf,

    /// Name of the merger executable inside the build directory
    /// (default: "Geant4phspMerger")
    pub executable: String,

    /// Header file suffix identifying merge inputs (default: ".IAEAheader")
    pub header_suffix: String,

    /// Output path passed to the merger as its last argument
    /// (default: "merged")
    pub output: String,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            project_dir: Utf8PathBuf::from("Geant4phspMerger"),
            executable: "Geant4phspMerger".to_string(),
            header_suffix: ".IAEAheader".to_string(),
            output: "merged".to_string(),
        }
    }
}

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build artifacts directory inside the project directory
    /// (default: "build")
    pub build_dir: Utf8PathBuf,

    /// Additional CMake arguments for the configure step
    #[serde(default)]
    pub cmake_args: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            build_dir: Utf8PathBuf::from("build"),
            cmake_args: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a directory.
    ///
    /// Reads `phspmerge.toml` if it exists, otherwise returns the defaults.
    pub fn load(dir: &Utf8Path) -> Result<Self> {
        let config_path = dir.join("phspmerge.toml");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        Self::parse(&content).map_err(|err| {
            Error::config(
                format!("Failed to parse {}", config_path),
                err.to_string(),
            )
        })
    }

    /// Load configuration from a string (for testing)
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
