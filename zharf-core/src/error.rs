//! Core error types
//!
//! Only lexicon construction can fail. Matching failures are ordinary
//! `None` results, and unscorable stems or unknown affix weights are
//! reported as diagnostics, never as errors.

use thiserror::Error;

/// Errors raised while parsing or building a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// I/O failure reading a lexicon file
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// An entry with no tokens or no characters
    #[error("empty entry in [{section}]")]
    EmptyEntry {
        /// The lexicon section containing the offending entry
        section: &'static str,
    },

    /// An affix weight outside {-1, +1}
    #[error("invalid weight {weight} for affix {affix:?} (must be -1 or +1)")]
    InvalidWeight {
        /// The affix text
        affix: String,
        /// The rejected weight value
        weight: i8,
    },

    /// The superlative literal is missing or empty
    #[error("superlative postfix must be a non-empty string")]
    MissingSuperlative,
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;
