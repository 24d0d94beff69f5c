//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// HTML tags to discard as sentence separators
    #[arg(long = "html-tag", value_name = "TAG")]
    pub html_tags: Vec<String>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize boundary rules");
        println!("2. Validate your configuration:");
        println!("   wordsent validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   wordsent process -i tokens.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let html_tags = self
            .html_tags
            .iter()
            .map(|t| format!("{t:?}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# wordsent configuration

[boundary]
# Regex for tokens that end a sentence; always matched against the whole token
boundary_pattern = '\.|[!?]+'

# Tokens that stay with the sentence they follow (closing quotes, brackets)
followers = [")", "]", '"', "'", "''", "-RRB-", "-RSB-", "-RCB-"]

# Literal separator tokens: dropped, and they end the current sentence
discard = ["\n", "*NL*"]

# Regexes for separator tokens
discard_patterns = [
    # Example: "-{{3,}}"
]

# HTML tags to drop as separators, e.g. ["p", "br"]
html_tags = [{html_tags}]

# Only keep tokens between region markers (optional)
# region_begin = "<text>"
# region_end = "</text>"

# Put every token in one sentence
one_sentence = false

# Emit empty sentences between adjacent separators
allow_empty_sentences = false

[output]
# Output format when --format is not given: text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true

# Separator between tokens in text and markdown output
joiner = " "
"#
        )
    }
}
