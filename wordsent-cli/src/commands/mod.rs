//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group tokens from files into sentences
    Process(process::ProcessArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available input formats
    InputFormats,
}
