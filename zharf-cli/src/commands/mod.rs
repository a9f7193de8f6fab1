//! CLI command implementations

use clap::Subcommand;

pub mod analyze;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score text files for conceptual complexity
    Analyze(analyze::AnalyzeArgs),

    /// Validate a lexicon file without analyzing anything
    Validate(validate::ValidateArgs),
}
