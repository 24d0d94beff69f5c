//! Whole-token regular expressions

use crate::error::{ConfigError, ConfigResult};
use regex::{Regex, RegexBuilder};

/// A compiled pattern that must match the entire token text
///
/// The original pattern source is kept for display and serialization;
/// matching always uses the anchored form.
#[derive(Debug, Clone)]
pub struct WholeTokenPattern {
    source: String,
    regex: Regex,
}

impl WholeTokenPattern {
    /// Compile `pattern` for whole-token matching
    pub fn new(field: &'static str, pattern: &str) -> ConfigResult<Self> {
        Self::compile(field, pattern, false)
    }

    /// Match `text` exactly, with no regex interpretation
    pub fn literal(field: &'static str, text: &str) -> ConfigResult<Self> {
        let mut compiled = Self::compile(field, &regex::escape(text), false)?;
        compiled.source = text.to_string();
        Ok(compiled)
    }

    /// The two case-insensitive patterns that discard an HTML tag
    pub fn html_tag(tag: &str) -> ConfigResult<[Self; 2]> {
        Ok([
            Self::compile("html tag", &format!(r"<\s*/?\s*{tag}\s*/?\s*>"), true)?,
            Self::compile("html tag", &format!(r"<\s*{tag}\s+[^>]+>"), true)?,
        ])
    }

    fn compile(field: &'static str, pattern: &str, case_insensitive: bool) -> ConfigResult<Self> {
        let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                field,
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Pattern as written by the caller
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the whole of `text` matches
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
