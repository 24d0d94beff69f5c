//! File schema for boundary configuration
//!
//! This module defines the TOML form of a [`BoundaryConfig`](super::BoundaryConfig).
//! Every field is optional; omitted fields take the default English rules.

use super::{DEFAULT_BOUNDARY_PATTERN, DEFAULT_DISCARD, DEFAULT_FOLLOWERS};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable boundary rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundarySpec {
    /// Regex for sentence-ending tokens
    pub boundary_pattern: String,
    /// Tokens that attach to the preceding sentence
    pub followers: Vec<String>,
    /// Literal separator tokens to drop
    pub discard: Vec<String>,
    /// Regexes for separator tokens to drop
    pub discard_patterns: Vec<String>,
    /// HTML tag names to drop
    pub html_tags: Vec<String>,
    /// Region-begin marker regex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_begin: Option<String>,
    /// Region-end marker regex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_end: Option<String>,
    /// Treat all input as a single sentence
    pub one_sentence: bool,
    /// Emit empty sentences between adjacent breaks
    pub allow_empty_sentences: bool,
}

impl Default for BoundarySpec {
    fn default() -> Self {
        Self {
            boundary_pattern: DEFAULT_BOUNDARY_PATTERN.to_string(),
            followers: DEFAULT_FOLLOWERS.iter().map(|s| s.to_string()).collect(),
            discard: DEFAULT_DISCARD.iter().map(|s| s.to_string()).collect(),
            discard_patterns: Vec::new(),
            html_tags: Vec::new(),
            region_begin: None,
            region_end: None,
            one_sentence: false,
            allow_empty_sentences: false,
        }
    }
}

impl BoundarySpec {
    /// Parse from TOML text
    pub fn from_toml_str(toml_str: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
