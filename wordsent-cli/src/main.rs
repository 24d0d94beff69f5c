//! wordsent command-line entry point

use anyhow::Result;
use clap::Parser;
use wordsent_cli::commands::{Commands, ListCommands};
use wordsent_cli::input::InputFormat;

/// Group pre-tokenized text into sentences
#[derive(Debug, Parser)]
#[command(name = "wordsent", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Formats => {
                    println!("Output formats:");
                    println!("  text      One sentence per line, tokens joined by a space");
                    println!("  json      JSON array of sentences with file and index");
                    println!("  markdown  Numbered list with a total count");
                }
                ListCommands::InputFormats => {
                    println!("Input formats:");
                    for format in InputFormat::ALL {
                        println!("  {:<10}  {}", format.as_str(), format.description());
                    }
                }
            }
            Ok(())
        }
    }
}
