//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputFormat};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use wordsent_core::{AnnotatedToken, BoundaryConfig, SegmentError, Segmenter, Sentence};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Token files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the configuration file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Layout of the token files
    #[arg(short = 't', long, value_enum, default_value = "lines")]
    pub input_format: InputFormat,

    /// Emit a newline token at each line end of whitespace input
    #[arg(long)]
    pub newline_tokens: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the sentence boundary regex
    #[arg(long, value_name = "REGEX")]
    pub boundary_pattern: Option<String>,

    /// Discard an HTML tag as a sentence separator (repeatable)
    #[arg(long = "html-tag", value_name = "TAG")]
    pub html_tags: Vec<String>,

    /// Only keep tokens after a token matching this regex
    #[arg(long, value_name = "REGEX")]
    pub region_begin: Option<String>,

    /// Stop keeping tokens at a token matching this regex
    #[arg(long, value_name = "REGEX")]
    pub region_end: Option<String>,

    /// Treat each file as a single sentence
    #[arg(long)]
    pub one_sentence: bool,

    /// Emit empty sentences between adjacent separators
    #[arg(long)]
    pub allow_empty: bool,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with their source file
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting token segmentation");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let segmenter = Segmenter::new(self.boundary_config(&cli_config)?);

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut formatter = self.create_formatter(&cli_config)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total = 0;
        if self.parallel {
            let documents = files
                .iter()
                .map(|path| self.read_tokens(path))
                .collect::<Result<Vec<_>>>()?;
            let results = segment_parallel(&segmenter, &files, &documents)?;
            for (path, sentences) in files.iter().zip(&results) {
                total += write_sentences(formatter.as_mut(), path, sentences)?;
                progress.file_completed(&path.display().to_string());
            }
        } else {
            for path in &files {
                let tokens = self.read_tokens(path)?;
                let sentences = segment_file(&segmenter, path, &tokens)?;
                total += write_sentences(formatter.as_mut(), path, &sentences)?;
                progress.file_completed(&path.display().to_string());
            }
        }
        progress.finish();
        formatter.finish()?;

        log::info!("Wrote {} sentences from {} file(s)", total, files.len());
        Ok(())
    }

    fn read_tokens(&self, path: &Path) -> Result<Vec<AnnotatedToken>> {
        let tokens = FileReader::read_tokens(path, self.input_format, self.newline_tokens)?;
        log::debug!("Read {} tokens from {}", tokens.len(), path.display());
        Ok(tokens)
    }

    /// Merge the configuration file with command-line overrides
    fn boundary_config(&self, cli_config: &CliConfig) -> Result<BoundaryConfig> {
        let mut spec = cli_config.boundary.clone();
        if let Some(pattern) = &self.boundary_pattern {
            spec.boundary_pattern = pattern.clone();
        }
        spec.html_tags.extend(self.html_tags.iter().cloned());
        if let Some(begin) = &self.region_begin {
            spec.region_begin = Some(begin.clone());
        }
        if let Some(end) = &self.region_end {
            spec.region_end = Some(end.clone());
        }
        spec.one_sentence |= self.one_sentence;
        spec.allow_empty_sentences |= self.allow_empty;

        BoundaryConfig::from_spec(&spec).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn create_formatter(&self, cli_config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&cli_config.output.default_format, true).map_err(
                |_| {
                    CliError::ConfigError(format!(
                        "unknown output format '{}'",
                        cli_config.output.default_format
                    ))
                },
            )?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let joiner = cli_config.output.joiner.as_str();
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, joiner)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, joiner)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

type FileSentences<'a> = Vec<Vec<Sentence<'a, AnnotatedToken>>>;

fn segment_file<'a>(
    segmenter: &Segmenter,
    path: &Path,
    tokens: &'a [AnnotatedToken],
) -> Result<Vec<Sentence<'a, AnnotatedToken>>> {
    let (sentences, stats) = segmenter
        .segment_with_stats(tokens)
        .map_err(|e| segmentation_error(path, e))?;
    log::debug!(
        "{}: {} sentences, {} tokens kept, {} dropped",
        path.display(),
        stats.sentences,
        stats.tokens_kept,
        stats.tokens_dropped
    );
    Ok(sentences)
}

fn segment_parallel<'a>(
    segmenter: &Segmenter,
    files: &[PathBuf],
    documents: &'a [Vec<AnnotatedToken>],
) -> Result<FileSentences<'a>> {
    segmenter.segment_batch(documents).map_err(|e| match e {
        SegmentError::InDocument { document, source } => {
            let path = files
                .get(document)
                .map_or_else(|| PathBuf::from("<input>"), PathBuf::clone);
            segmentation_error(&path, *source)
        }
        other => segmentation_error(Path::new("<input>"), other),
    })
}

/// Write one file's sentences, returning how many were written
fn write_sentences(
    formatter: &mut dyn OutputFormatter,
    path: &Path,
    sentences: &[Sentence<'_, AnnotatedToken>],
) -> Result<usize> {
    let source = path.display().to_string();
    for (index, sentence) in sentences.iter().enumerate() {
        formatter.format_sentence(&source, index, &sentence.texts())?;
    }
    Ok(sentences.len())
}

fn segmentation_error(path: &Path, error: SegmentError) -> anyhow::Error {
    CliError::SegmentationError {
        file: path.display().to_string(),
        reason: error.to_string(),
    }
    .into()
}
