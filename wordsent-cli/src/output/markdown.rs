//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    joiner: String,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, joiner: impl Into<String>) -> Self {
        Self {
            writer,
            joiner: joiner.into(),
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, _source: &str, _index: usize, tokens: &[&str]) -> Result<()> {
        self.sentence_count += 1;
        writeln!(
            self.writer,
            "{}. {}",
            self.sentence_count,
            tokens.join(self.joiner.as_str())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
