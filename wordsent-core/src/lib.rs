//! Sentence grouping for pre-tokenized text
//!
//! This crate takes a flat stream of tokens produced by an upstream
//! tokenizer and decides where sentences end. It does not tokenize or
//! disambiguate abbreviations; it applies configured boundary rules and
//! externally supplied annotations in a single pass.
//!
//! # Architecture
//!
//! - [`config`]: immutable boundary rules, compiled once and shared
//! - [`token`]: the capability a token must offer to be segmented
//! - [`segmenter`]: the boundary state machine
//!
//! # Example
//!
//! ```rust
//! use wordsent_core::{segment, BoundaryConfig};
//!
//! let tokens = ["I", "ran", ".", "She", "won", "."];
//! let sentences = segment(&tokens, &BoundaryConfig::default()).unwrap();
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[1].texts(), vec!["She", "won", "."]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod segmenter;
pub mod token;

pub use config::{
    BoundaryConfig, BoundaryConfigBuilder, BoundarySpec, WholeTokenPattern,
    DEFAULT_BOUNDARY_PATTERN, DEFAULT_DISCARD, DEFAULT_FOLLOWERS, NEWLINE_TOKEN,
};
pub use error::{ConfigError, SegmentError};
pub use segmenter::{segment, segment_with_stats, SegmentationStats, Segmenter, Sentence};
pub use token::{AnnotatedToken, Token};
