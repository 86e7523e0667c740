//! CLI configuration parsing.
//!
//! Defaults for the `hilbert` binary can be kept in a TOML file:
//!
//! ```toml
//! [grid]
//! side = 16
//!
//! [output]
//! format = "json"
//! ```
//!
//! Every section and key is optional; command-line flags take precedence.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::logging::debug;

/// Configuration loaded from TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grid settings.
    #[serde(default)]
    pub grid: GridConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Grid settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Default grid side (must be a power of two).
    pub side: Option<u64>,
}

/// Output settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the CLI prints cells and distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain whitespace-separated text.
    #[default]
    Text,
    /// JSON documents, one per command.
    Json,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load from `path` when given, otherwise return the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }
}
