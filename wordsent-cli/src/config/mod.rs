//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wordsent_core::BoundarySpec;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Sentence boundary rules
    #[serde(default)]
    pub boundary: BoundarySpec,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Separator placed between tokens in text and markdown output
    pub joiner: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            joiner: " ".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
