//! Exception word skipping
//!
//! Exception entries are stored as whole sequences, affix variants
//! included, so this check never decomposes anything. It only reports how
//! many tokens to skip.

use crate::lexicon::Lexicon;

/// Longest-match filter over the exception sequence trie
pub struct ExceptionDetector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ExceptionDetector<'a> {
    /// Create a detector over a compiled lexicon
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Length of the longest exception sequence starting at `tokens[i]`,
    /// or 0 if none
    pub fn check<S: AsRef<str>>(&self, tokens: &[S], i: usize) -> usize {
        self.lexicon.exception_words.longest_match(tokens, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_exception_sequence_is_reported() {
        let lexicon = Lexicon::from_toml_str(
            r#"
            [metadata]
            code = "xx"
            name = "Test"

            [words]
            low = ["deep"]
            high = []

            [affixes]
            superlative = "est"

            [exceptions]
            sequences = ["deep blue", "deep blue sea"]
        "#,
        )
        .unwrap();
        let detector = ExceptionDetector::new(&lexicon);

        assert_eq!(detector.check(&["deep", "blue", "sea"], 0), 3);
        assert_eq!(detector.check(&["deep", "blue", "sky"], 0), 2);
        assert_eq!(detector.check(&["deep", "sky"], 0), 0);
        assert_eq!(detector.check(&["deep"], 4), 0);
    }
}
