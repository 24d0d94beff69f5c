//! Parsing token files
//!
//! Tokenization happens upstream; these readers only recover the token
//! boundaries the upstream tool already wrote out.

use anyhow::{Context, Result};
use wordsent_core::{AnnotatedToken, NEWLINE_TOKEN};

/// Layout of a token file
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One token per line; a blank line is a newline token
    Lines,
    /// Tokens separated by whitespace
    Whitespace,
    /// One JSON token object per line
    Jsonl,
}

impl InputFormat {
    /// Every format, in display order
    pub const ALL: [InputFormat; 3] = [
        InputFormat::Lines,
        InputFormat::Whitespace,
        InputFormat::Jsonl,
    ];

    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Lines => "lines",
            InputFormat::Whitespace => "whitespace",
            InputFormat::Jsonl => "jsonl",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            InputFormat::Lines => "One token per line, blank lines become *NL*",
            InputFormat::Whitespace => "Whitespace separated tokens",
            InputFormat::Jsonl => "One {\"text\": ...} object per line with optional annotations",
        }
    }
}

/// Split `content` into tokens
///
/// With `newline_tokens`, whitespace input emits a newline token at each
/// line end so that line breaks can act as separators.
pub fn parse_tokens(
    content: &str,
    format: InputFormat,
    newline_tokens: bool,
) -> Result<Vec<AnnotatedToken>> {
    match format {
        InputFormat::Lines => Ok(content
            .lines()
            .map(|line| match line.trim() {
                "" => AnnotatedToken::new(NEWLINE_TOKEN),
                token => AnnotatedToken::new(token),
            })
            .collect()),
        InputFormat::Whitespace => {
            let mut tokens = Vec::new();
            for line in content.lines() {
                tokens.extend(line.split_whitespace().map(AnnotatedToken::new));
                if newline_tokens {
                    tokens.push(AnnotatedToken::new(NEWLINE_TOKEN));
                }
            }
            Ok(tokens)
        }
        InputFormat::Jsonl => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("Invalid token on line {}", number + 1))
            })
            .collect(),
    }
}
