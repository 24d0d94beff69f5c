//! wordsent CLI library
//!
//! This library provides the command-line interface for grouping
//! pre-tokenized files into sentences.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
