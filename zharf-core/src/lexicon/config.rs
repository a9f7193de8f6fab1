//! Lexicon configuration schema
//!
//! This module defines the TOML schema a lexicon is written in. Word
//! entries are whitespace-separated token sequences; affix weights are
//! signed values in {-1, +1}.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub words: Words,
    pub affixes: Affixes,
    #[serde(default)]
    pub negation: Negation,
    #[serde(default)]
    pub exceptions: Exceptions,
    #[serde(default)]
    pub normalization: Normalization,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Complexity word lists
///
/// Each entry is one word sequence; multi-token sequences are written with
/// spaces between tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Words {
    pub low: Vec<String>,
    pub high: Vec<String>,
}

/// Affix tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Affixes {
    #[serde(default)]
    pub prefixes: HashMap<String, i8>,
    #[serde(default)]
    pub postfixes: HashMap<String, i8>,
    /// The designated superlative postfix literal
    pub superlative: String,
}

/// Negating verb sequences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Negation {
    #[serde(default)]
    pub verbs: Vec<String>,
}

/// Exception word sequences, stored with any affix variants spelled out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exceptions {
    #[serde(default)]
    pub sequences: Vec<String>,
}

/// Text normalization rules, consumed by callers before tokenization
///
/// The core never applies these; they ride along in the lexicon file so a
/// language ships as a single artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Normalization {
    /// Literal substitutions applied to raw text (e.g. script unification)
    #[serde(default)]
    pub substitutions: HashMap<String, String>,
    /// Literal strings deleted from raw text
    #[serde(default)]
    pub deletions: Vec<String>,
    /// Every character the lexicon's script is expected to use; tokens
    /// containing other characters are worth a warning
    #[serde(default)]
    pub alphabet: Option<String>,
}

/// Split a word-sequence entry into its tokens
pub(crate) fn entry_tokens(entry: &str) -> Vec<String> {
    entry.split_whitespace().map(str::to_string).collect()
}
