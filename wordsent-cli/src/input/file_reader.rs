//! File reading utilities

use super::token_reader::{parse_tokens, InputFormat};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use wordsent_core::AnnotatedToken;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and split it into tokens
    pub fn read_tokens(
        path: &Path,
        format: InputFormat,
        newline_tokens: bool,
    ) -> Result<Vec<AnnotatedToken>> {
        let content = Self::read_text(path)?;
        parse_tokens(&content, format, newline_tokens)
            .with_context(|| format!("Failed to parse tokens in: {}", path.display()))
    }
}
