//! Superlative detection
//!
//! A single fixed-postfix special case, checked before general
//! decomposition: a token ending in the superlative literal, or a token
//! followed by the literal standing alone.

use crate::decompose::DecomposedWord;
use crate::lexicon::Lexicon;

/// Detector for the superlative postfix
pub struct SuperlativeDetector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SuperlativeDetector<'a> {
    /// Create a detector over a compiled lexicon
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Match a superlative anchored at `tokens[i]`, if any
    pub fn check<S: AsRef<str>>(&self, tokens: &[S], i: usize) -> Option<DecomposedWord> {
        let literal = self.lexicon.superlative();
        let word = tokens.get(i)?.as_ref();

        // Fused onto the current token.
        if word.ends_with(literal) {
            let stem = &word[..word.len() - literal.len()];
            return Some(DecomposedWord {
                prefix: None,
                stem: vec![stem.to_string()],
                postfix: Some(literal.to_string()),
                negation: None,
                consumed: 1,
            });
        }

        // Disconnected: the next token is exactly the literal.
        if tokens.get(i + 1).map(AsRef::as_ref) == Some(literal) {
            return Some(DecomposedWord {
                prefix: None,
                stem: vec![word.to_string()],
                postfix: Some(literal.to_string()),
                negation: None,
                consumed: 2,
            });
        }

        None
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
            high = []

            [affixes]
            superlative = "est"
        "#,
        )
        .unwrap()
    }

    #[test]
    fn fused_superlative() {
        let lexicon = lexicon();
        let detector = SuperlativeDetector::new(&lexicon);

        let word = detector.check(&["knowest"], 0).unwrap();
        assert_eq!(word.stem, vec!["know"]);
        assert_eq!(word.postfix.as_deref(), Some("est"));
        assert_eq!(word.consumed, 1);
    }

    #[test]
    fn disconnected_superlative_consumes_two_tokens() {
        let lexicon = lexicon();
        let detector = SuperlativeDetector::new(&lexicon);

        let word = detector.check(&["know", "est"], 0).unwrap();
        assert_eq!(word.stem, vec!["know"]);
        assert_eq!(word.postfix.as_deref(), Some("est"));
        assert_eq!(word.consumed, 2);
    }

    #[test]
    fn no_superlative_no_match() {
        let lexicon = lexicon();
        let detector = SuperlativeDetector::new(&lexicon);

        assert!(detector.check(&["know"], 0).is_none());
        assert!(detector.check(&["know", "ly"], 0).is_none());
        // Out of range anchors never match.
        assert!(detector.check(&["know"], 3).is_none());
    }

    #[test]
    fn literal_alone_matches_with_empty_stem() {
        // The fused branch fires even when the token is exactly the
        // literal; the empty stem is unscorable but the superlative
        // override classifies it low regardless.
        let lexicon = lexicon();
        let detector = SuperlativeDetector::new(&lexicon);

        let word = detector.check(&["est"], 0).unwrap();
        assert_eq!(word.stem, vec![""]);
        assert_eq!(word.consumed, 1);
    }
}
