//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Input file the sentence came from
    pub file: String,
    /// Position of the sentence within its file
    pub index: usize,
    /// Sentence tokens in order
    pub tokens: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, source: &str, index: usize, tokens: &[&str]) -> Result<()> {
        self.sentences.push(SentenceData {
            file: source.to_string(),
            index,
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
