//! Complexity classification of decomposed words
//!
//! The score is the signed product of four factors in {-1, 0, +1}: prefix
//! weight, postfix weight, stem classification, and negation. A negative
//! product classifies low, positive high, zero unscorable. The stem factor
//! is the only one that can be zero, so a word is unscorable exactly when
//! its stem is in neither classification set.

use std::fmt;

use serde::Serialize;

use crate::decompose::DecomposedWord;
use crate::lexicon::Lexicon;

/// Final classification of a scored word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    /// Low conceptual complexity
    Low,
    /// High conceptual complexity
    High,
}

/// Non-fatal condition met while scoring
///
/// Diagnostics never abort a scan; the affected factor falls back to
/// neutral (affix weights) or zero (stems).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// Stem sequence absent from both classification sets; the match is
    /// dropped from the output lists
    UnknownStem {
        /// The unclassifiable stem tokens
        stem: Vec<String>,
    },
    /// Prefix accepted by the trie but missing from the weight table
    UnknownPrefixWeight {
        /// The prefix text
        prefix: String,
    },
    /// Postfix accepted by the trie but missing from the weight table
    UnknownPostfixWeight {
        /// The postfix text
        postfix: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownStem { stem } => {
                write!(f, "could not assess the complexity of {:?}", stem.join(" "))
            }
            Diagnostic::UnknownPrefixWeight { prefix } => {
                write!(f, "no complexity weight for prefix {prefix:?}")
            }
            Diagnostic::UnknownPostfixWeight { postfix } => {
                write!(f, "no complexity weight for postfix {postfix:?}")
            }
        }
    }
}

/// Classify a decomposed word, or `None` if it is unscorable
///
/// A word whose postfix is the lexicon's superlative literal is low
/// complexity unconditionally. Diagnostics are appended to `diagnostics`.
pub fn complexity_of(
    lexicon: &Lexicon,
    word: &DecomposedWord,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Complexity> {
    if word.postfix.as_deref() == Some(lexicon.superlative()) {
        return Some(Complexity::Low);
    }

    let product = prefix_factor(lexicon, word.prefix.as_deref(), diagnostics)
        * postfix_factor(lexicon, word.postfix.as_deref(), diagnostics)
        * stem_factor(lexicon, &word.stem, diagnostics)
        * negation_factor(word);

    match product {
        p if p < 0 => Some(Complexity::Low),
        p if p > 0 => Some(Complexity::High),
        _ => None,
    }
}

fn prefix_factor(lexicon: &Lexicon, prefix: Option<&str>, diagnostics: &mut Vec<Diagnostic>) -> i8 {
    let Some(prefix) = prefix else {
        // No prefix has no effect: the multiplicative identity.
        return 1;
    };
    match lexicon.prefix_weights.get(prefix) {
        Some(&weight) => weight,
        None => {
            tracing::warn!(prefix, "no complexity weight for prefix");
            diagnostics.push(Diagnostic::UnknownPrefixWeight {
                prefix: prefix.to_string(),
            });
            1
        }
    }
}

fn postfix_factor(
    lexicon: &Lexicon,
    postfix: Option<&str>,
    diagnostics: &mut Vec<Diagnostic>,
) -> i8 {
    let Some(postfix) = postfix else {
        return 1;
    };
    match lexicon.postfix_weights.get(postfix) {
        Some(&weight) => weight,
        None => {
            tracing::warn!(postfix, "no complexity weight for postfix");
            diagnostics.push(Diagnostic::UnknownPostfixWeight {
                postfix: postfix.to_string(),
            });
            1
        }
    }
}

fn stem_factor(lexicon: &Lexicon, stem: &[String], diagnostics: &mut Vec<Diagnostic>) -> i8 {
    if lexicon.low_stems.contains(stem) {
        -1
    } else if lexicon.high_stems.contains(stem) {
        1
    } else {
        // Neutralize the word entirely; the caller drops it.
        tracing::warn!(stem = %stem.join(" "), "could not assess stem complexity");
        diagnostics.push(Diagnostic::UnknownStem {
            stem: stem.to_vec(),
        });
        0
    }
}

fn negation_factor(word: &DecomposedWord) -> i8 {
    if word.negation.is_some() {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"

            [words]
            low = ["know"]
            high = ["deep think"]

            [affixes]
            prefixes = { "un" = -1 }
            postfixes = { "ly" = 1 }
            superlative = "est"

            [negation]
            verbs = ["not"]
        "#,
        )
        .unwrap()
    }

    fn word(
        prefix: Option<&str>,
        stem: &[&str],
        postfix: Option<&str>,
        negation: Option<&[&str]>,
    ) -> DecomposedWord {
        DecomposedWord {
            prefix: prefix.map(str::to_string),
            stem: stem.iter().map(|s| s.to_string()).collect(),
            postfix: postfix.map(str::to_string),
            negation: negation.map(|n| n.iter().map(|s| s.to_string()).collect()),
            consumed: 1,
        }
    }

    #[test]
    fn bare_low_stem_scores_low() {
        let lexicon = lexicon();
        let mut diags = Vec::new();
        let result = complexity_of(&lexicon, &word(None, &["know"], None, None), &mut diags);
        assert_eq!(result, Some(Complexity::Low));
        assert!(diags.is_empty());
    }

    #[test]
    fn negative_prefix_flips_low_stem_to_high() {
        let lexicon = lexicon();
        let mut diags = Vec::new();
        let w = word(Some("un"), &["know"], Some("ly"), None);
        // (-1) * (+1) * (-1) * (+1) = +1
        assert_eq!(complexity_of(&lexicon, &w, &mut diags), Some(Complexity::High));
    }

    #[test]
    fn negation_flips_polarity() {
        let lexicon = lexicon();
        let mut diags = Vec::new();
        let w = word(None, &["know"], None, Some(&["not"]));
        // (+1) * (+1) * (-1) * (-1) = +1
        assert_eq!(complexity_of(&lexicon, &w, &mut diags), Some(Complexity::High));
    }

    #[test]
    fn superlative_postfix_forces_low() {
        let lexicon = lexicon();
        let mut diags = Vec::new();
        // Even with a negating sequence and an unknown stem attached.
        let w = word(Some("un"), &["mystery"], Some("est"), Some(&["not"]));
        assert_eq!(complexity_of(&lexicon, &w, &mut diags), Some(Complexity::Low));
        assert!(diags.is_empty());
    }

    #[test]
    fn unknown_stem_is_unscorable_with_diagnostic() {
        let lexicon = lexicon();
        let mut diags = Vec::new();
        let w = word(None, &["mystery"], None, None);
        assert_eq!(complexity_of(&lexicon, &w, &mut diags), None);
        assert_eq!(
            diags,
            vec![Diagnostic::UnknownStem {
                stem: vec!["mystery".to_string()]
            }]
        );
    }

    #[test]
    fn unknown_affix_weight_is_neutral_with_diagnostic() {
        let lexicon = lexicon();
        let mut diags = Vec::new();
        let w = word(Some("crypto"), &["know"], None, None);
        // Unknown prefix weight falls back to +1, leaving the stem factor.
        assert_eq!(complexity_of(&lexicon, &w, &mut diags), Some(Complexity::Low));
        assert_eq!(
            diags,
            vec![Diagnostic::UnknownPrefixWeight {
                prefix: "crypto".to_string()
            }]
        );
    }

    #[test]
    fn multi_token_stem_scores_high() {
        let lexicon = lexicon();
        let mut diags = Vec::new();
        let w = word(None, &["deep", "think"], None, None);
        assert_eq!(complexity_of(&lexicon, &w, &mut diags), Some(Complexity::High));
    }
}
