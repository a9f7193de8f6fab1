//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use zharf_core::{Lexicon, LexiconConfig};

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        let config = match LexiconConfig::from_path(&self.lexicon) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                return Err(CliError::LexiconError(e.to_string()).into());
            }
        };

        // Parsing alone is not enough; compiling catches empty entries,
        // bad affix weights, and a missing superlative.
        match Lexicon::from_config(&config) {
            Ok(_) => {
                println!("✓ Lexicon is valid!");
                println!("  Language code: {}", config.metadata.code);
                println!("  Language name: {}", config.metadata.name);
                println!(
                    "  Entries: {} low, {} high, {} prefixes, {} postfixes",
                    config.words.low.len(),
                    config.words.high.len(),
                    config.affixes.prefixes.len(),
                    config.affixes.postfixes.len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(CliError::LexiconError(e.to_string()).into())
            }
        }
    }
}
