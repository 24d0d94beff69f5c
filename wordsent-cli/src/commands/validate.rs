//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordsent_core::BoundaryConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let loaded = CliConfig::load(&self.config).and_then(|config| {
            BoundaryConfig::from_spec(&config.boundary).map_err(anyhow::Error::from)
        });

        match loaded {
            Ok(boundary) => {
                println!("✓ Configuration is valid!");
                println!("  Boundary pattern: {}", boundary.boundary_pattern());
                println!("  Followers: {}", boundary.followers().len());
                println!("  Discard rules: {}", boundary.discard_patterns().len());
                if let Some(begin) = boundary.region_begin_pattern() {
                    println!("  Region begin: {begin}");
                }
                if let Some(end) = boundary.region_end_pattern() {
                    println!("  Region end: {end}");
                }
                if boundary.one_sentence() {
                    println!("  One-sentence mode enabled");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[boundary]
boundary_pattern = "[.!?。]"
html_tags = ["p"]
region_begin = "<text>"
region_end = "</text>"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_bad_regex() {
        let toml_content = r#"
[boundary]
boundary_pattern = "[unclosed"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("invalid boundary pattern"));
    }

    #[test]
    fn test_validate_unknown_field() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[boundary]\nterminators = [\".\"]\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
