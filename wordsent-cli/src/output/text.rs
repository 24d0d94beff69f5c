//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
    joiner: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, joiner: impl Into<String>) -> Self {
        Self {
            writer,
            joiner: joiner.into(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, _source: &str, _index: usize, tokens: &[&str]) -> Result<()> {
        writeln!(self.writer, "{}", tokens.join(self.joiner.as_str()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
