//! Error types for configuration and segmentation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`BoundaryConfig`](crate::BoundaryConfig)
///
/// Construction is the only place patterns are compiled, so a configuration
/// that was built successfully can never fail during segmentation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A boundary, discard or region pattern did not compile
    #[error("invalid {field} pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Which configuration field the pattern belongs to
        field: &'static str,
        /// The pattern as supplied by the caller
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration file could not be read
    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the schema
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised by a segmentation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A token could not yield a text value
    #[error("token at index {index} has no text value")]
    MissingText {
        /// Position of the offending token in the input
        index: usize,
    },

    /// A document in a batch failed
    #[error("document {document}: {source}")]
    InDocument {
        /// Position of the failing document in the batch
        document: usize,
        /// The error raised for that document
        #[source]
        source: Box<SegmentError>,
    },
}

impl SegmentError {
    pub(crate) fn in_document(self, document: usize) -> Self {
        SegmentError::InDocument {
            document,
            source: Box::new(self),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;
