//! Lexicon loading entry points

use std::path::Path;

use crate::error::Result;
use crate::lexicon::{config::LexiconConfig, Lexicon};

/// The Persian lexicon shipped with the crate
const PERSIAN_TOML: &str = include_str!("../../configs/lexicons/persian.toml");

impl LexiconConfig {
    /// Parse a lexicon configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a lexicon configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Lexicon {
    /// Parse and build a lexicon from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_config(&LexiconConfig::from_toml_str(toml_str)?)
    }

    /// Read, parse, and build a lexicon from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(&LexiconConfig::from_path(path)?)
    }

    /// The embedded Persian lexicon
    ///
    /// A starter lexicon carrying the Persian superlative postfix and
    /// normalization rules; projects with a curated word list should load
    /// their own file instead.
    pub fn persian() -> Result<Self> {
        Self::from_toml_str(PERSIAN_TOML)
    }

    /// Configuration of the embedded Persian lexicon, including its
    /// normalization rules
    pub fn persian_config() -> Result<LexiconConfig> {
        LexiconConfig::from_toml_str(PERSIAN_TOML)
    }
}
