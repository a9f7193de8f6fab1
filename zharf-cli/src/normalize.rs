//! Text normalization
//!
//! Everything that has to happen to raw text before the core engine sees
//! it: punctuation standardization, script unification, and removal of
//! invisible or unwanted characters. The rules are literal string
//! replacements, partly built in and partly supplied by the lexicon's
//! `[normalization]` section.

use std::collections::HashSet;

use zharf_core::lexicon::config::Normalization;

// Characters handled before user rules run.
const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const THIN_SPACE: char = '\u{2009}';
const LEFT_TO_RIGHT_OVERRIDE: char = '\u{202D}';
const RIGHT_TO_LEFT_OVERRIDE: char = '\u{202E}';
const POP_DIRECTIONAL_FORMATTING: char = '\u{202C}';

/// Compiled normalization rules
pub struct Normalizer {
    substitutions: Vec<(String, String)>,
    deletions: Vec<String>,
    alphabet: Option<HashSet<char>>,
}

impl Normalizer {
    /// Build from the lexicon's normalization section
    pub fn from_config(config: &Normalization) -> Self {
        Self {
            substitutions: config
                .substitutions
                .iter()
                .map(|(from, to)| (from.clone(), to.clone()))
                .collect(),
            deletions: config.deletions.clone(),
            alphabet: config
                .alphabet
                .as_ref()
                .map(|chars| chars.chars().collect()),
        }
    }

    /// Map Persian sentence punctuation onto its ASCII equivalents
    ///
    /// Runs on the whole text before sentence splitting, so the splitter
    /// only has to know standard punctuation.
    pub fn standardize_punctuation(&self, text: &str) -> String {
        text.replace('؛', ";").replace('؟', "?").replace('،', ",")
    }

    /// Clean one sentence before it is tokenized
    ///
    /// Joiner and spacing characters become real spaces (deleting them
    /// could fuse adjacent words), directional overrides and punctuation
    /// are deleted, then the user rules run and the result is trimmed.
    pub fn clean(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                ZERO_WIDTH_NON_JOINER | THIN_SPACE | '(' | ')' => out.push(' '),
                LEFT_TO_RIGHT_OVERRIDE | RIGHT_TO_LEFT_OVERRIDE | POP_DIRECTIONAL_FORMATTING => {}
                c if c.is_ascii_punctuation() => {}
                c => out.push(c),
            }
        }

        for (from, to) in &self.substitutions {
            out = out.replace(from.as_str(), to);
        }
        for rule in &self.deletions {
            out = out.replace(rule.as_str(), "");
        }

        out.trim().to_string()
    }

    /// Warn about characters outside the lexicon's alphabet
    ///
    /// Purely advisory; unknown characters usually mean the substitution
    /// rules are missing a script variant.
    pub fn check_alphabet(&self, token: &str) {
        let Some(alphabet) = &self.alphabet else {
            return;
        };
        for ch in token.chars() {
            if !alphabet.contains(&ch) {
                log::warn!("unknown character {ch:?} in token {token:?}");
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&Normalization::default())
    }
}
