//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    NoInputFiles,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A token in an input file could not be segmented
    SegmentationError {
        /// File the token came from
        file: String,
        /// Error reported by the segmenter
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles => write!(f, "No files found matching the provided patterns"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SegmentationError { file, reason } => {
                write!(f, "Segmentation failed for {file}: {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}
