//! Configuration types for lidder.
//!
//! A configuration holds three lists: path patterns to `include`, path
//! patterns to `exclude`, and the `rules`, each a content pattern plus the
//! files where it is allowed to occur.
//!
//! ```toml
//! include = ['\.go$']
//! exclude = ['^vendor/']
//!
//! [[rules]]
//! pattern = 'panic\('
//! expected = ["cmd/main.go"]
//! ```
//!
//! The same document is accepted in YAML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for lidder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LidConfig {
    /// Regex patterns over file paths selecting the files to scan.
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns over file paths removing files from the scan.
    /// Exclusion wins over inclusion.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Tracked content patterns, in report order.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// One tracked pattern and the files allowed to contain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Regex matched against every scanned line.
    pub pattern: String,

    /// Files where the pattern is sanctioned.
    #[serde(default)]
    pub expected: Vec<String>,
}

impl RuleSpec {
    /// Creates a rule spec.
    #[must_use]
    pub fn new<I, S>(pattern: impl Into<String>, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            expected: expected.into_iter().map(Into::into).collect(),
        }
    }
}

/// Document format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document.
    Toml,
    /// YAML document.
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension: `.yaml`/`.yml` are YAML,
    /// everything else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Toml,
        }
    }
}

impl LidConfig {
    /// Creates a new empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    /// Parses configuration in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is invalid.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => Self::parse_toml(content),
            ConfigFormat::Yaml => Self::parse_yaml(content),
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses configuration from a YAML string.
    ///
    /// An empty document is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Adds a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleSpec) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
