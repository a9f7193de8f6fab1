//! Compiled lexicon
//!
//! The lexicon is built once from a [`LexiconConfig`] and is read-only for
//! the rest of the run. Nothing in the matching path ever mutates it, so a
//! single lexicon can back any number of concurrent sentence scans.

pub mod config;
mod loader;

use std::collections::{HashMap, HashSet};

use crate::error::{LexiconError, Result};
use crate::trie::{CharTrie, Direction, TokenTrie};

pub use config::LexiconConfig;

/// Compiled, immutable lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Complexity-word sequences (both low and high)
    pub(crate) complexity_words: TokenTrie,
    /// Whole sequences to skip without decomposition
    pub(crate) exception_words: TokenTrie,
    /// Trailing negating-verb sequences
    pub(crate) negating_verbs: TokenTrie,
    /// Integrated prefixes, inserted forward
    pub(crate) prefix_trie: CharTrie,
    /// Integrated postfixes, inserted backward
    pub(crate) postfix_trie: CharTrie,
    /// Prefix text -> signed weight in {-1, +1}
    pub(crate) prefix_weights: HashMap<String, i8>,
    /// Postfix text -> signed weight in {-1, +1}
    pub(crate) postfix_weights: HashMap<String, i8>,
    /// Token sequences classified low-complexity
    pub(crate) low_stems: HashSet<Vec<String>>,
    /// Token sequences classified high-complexity
    pub(crate) high_stems: HashSet<Vec<String>>,
    /// The designated superlative postfix literal
    pub(crate) superlative: String,
}

impl Lexicon {
    /// Build a lexicon from its configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        if config.affixes.superlative.is_empty() {
            return Err(LexiconError::MissingSuperlative);
        }

        let mut complexity_words = TokenTrie::new();
        let mut low_stems = HashSet::new();
        let mut high_stems = HashSet::new();

        for entry in &config.words.low {
            let tokens = checked_tokens(entry, "words.low")?;
            complexity_words.insert(&tokens);
            low_stems.insert(tokens);
        }
        for entry in &config.words.high {
            let tokens = checked_tokens(entry, "words.high")?;
            complexity_words.insert(&tokens);
            high_stems.insert(tokens);
        }

        let mut negating_verbs = TokenTrie::new();
        for entry in &config.negation.verbs {
            negating_verbs.insert(&checked_tokens(entry, "negation.verbs")?);
        }

        let mut exception_words = TokenTrie::new();
        for entry in &config.exceptions.sequences {
            exception_words.insert(&checked_tokens(entry, "exceptions.sequences")?);
        }

        let mut prefix_trie = CharTrie::new();
        let mut prefix_weights = HashMap::new();
        for (prefix, &weight) in &config.affixes.prefixes {
            check_affix(prefix, weight, "affixes.prefixes")?;
            prefix_trie.insert(prefix, Direction::Forward);
            prefix_weights.insert(prefix.clone(), weight);
        }

        let mut postfix_trie = CharTrie::new();
        let mut postfix_weights = HashMap::new();
        for (postfix, &weight) in &config.affixes.postfixes {
            check_affix(postfix, weight, "affixes.postfixes")?;
            postfix_trie.insert(postfix, Direction::Reverse);
            postfix_weights.insert(postfix.clone(), weight);
        }

        Ok(Self {
            complexity_words,
            exception_words,
            negating_verbs,
            prefix_trie,
            postfix_trie,
            prefix_weights,
            postfix_weights,
            low_stems,
            high_stems,
            superlative: config.affixes.superlative.clone(),
        })
    }

    /// The superlative postfix literal
    pub fn superlative(&self) -> &str {
        &self.superlative
    }

    /// Whether the exact text is a known disconnected prefix
    pub fn is_prefix(&self, text: &str) -> bool {
        self.prefix_weights.contains_key(text)
    }

    /// Whether the exact text is a known disconnected postfix
    pub fn is_postfix(&self, text: &str) -> bool {
        self.postfix_weights.contains_key(text)
    }
}

fn checked_tokens(entry: &str, section: &'static str) -> Result<Vec<String>> {
    let tokens = config::entry_tokens(entry);
    if tokens.is_empty() {
        return Err(LexiconError::EmptyEntry { section });
    }
    Ok(tokens)
}

fn check_affix(affix: &str, weight: i8, section: &'static str) -> Result<()> {
    if affix.is_empty() {
        return Err(LexiconError::EmptyEntry { section });
    }
    if weight != -1 && weight != 1 {
        return Err(LexiconError::InvalidWeight {
            affix: affix.to_string(),
            weight,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_toml() -> &'static str {
        r#"
            [metadata]
            code = "fa"
            name = "Persian"

            [words]
            low = ["know"]
            high = ["deep think"]

            [affixes]
            prefixes = { "un" = -1 }
            postfixes = { "ly" = 1 }
            superlative = "est"

            [negation]
            verbs = ["not"]

            [exceptions]
            sequences = ["deep blue"]
        "#
    }

    #[test]
    fn builds_all_tables() {
        let lexicon = Lexicon::from_toml_str(base_toml()).unwrap();

        assert!(lexicon.complexity_words.is_single_accepted("know"));
        assert_eq!(
            lexicon.complexity_words.longest_match(&["deep", "think"], 0),
            2
        );
        assert_eq!(
            lexicon.exception_words.longest_match(&["deep", "blue"], 0),
            2
        );
        assert_eq!(lexicon.negating_verbs.longest_match(&["not"], 0), 1);
        assert!(lexicon.is_prefix("un"));
        assert!(lexicon.is_postfix("ly"));
        assert!(!lexicon.is_postfix("un"));
        assert_eq!(lexicon.superlative(), "est");
        assert!(lexicon.low_stems.contains(&vec!["know".to_string()]));
        assert!(lexicon
            .high_stems
            .contains(&vec!["deep".to_string(), "think".to_string()]));
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let toml_str = base_toml().replace(r#"{ "un" = -1 }"#, r#"{ "un" = -2 }"#);
        let err = Lexicon::from_toml_str(&toml_str).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidWeight { weight: -2, .. }));
    }

    #[test]
    fn rejects_blank_word_entry() {
        let toml_str = base_toml().replace(r#"low = ["know"]"#, r#"low = ["  "]"#);
        let err = Lexicon::from_toml_str(&toml_str).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::EmptyEntry {
                section: "words.low"
            }
        ));
    }

    #[test]
    fn rejects_empty_superlative() {
        let toml_str = base_toml().replace(r#"superlative = "est""#, r#"superlative = """#);
        let err = Lexicon::from_toml_str(&toml_str).unwrap_err();
        assert!(matches!(err, LexiconError::MissingSuperlative));
    }
}
