//! Sentence scanning
//!
//! Left-to-right pass over a tokenized sentence, trying the three
//! detectors at each position in priority order: exception (skip, never
//! recorded), superlative, decomposition. A match advances the cursor by
//! its consumed length; no match advances it by one.

use serde::Serialize;

use crate::decompose::{DecomposedWord, DecompositionEngine};
use crate::exception::ExceptionDetector;
use crate::lexicon::Lexicon;
use crate::score::{complexity_of, Complexity, Diagnostic};
use crate::superlative::SuperlativeDetector;

/// Outcome of scanning one sentence
///
/// Unscorable matches are dropped: they appear in neither list, only as a
/// diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceResult {
    /// The original sentence text
    pub sentence: String,
    /// Its token sequence as scanned
    pub tokens: Vec<String>,
    /// Matches classified low-complexity, in scan order
    pub low: Vec<DecomposedWord>,
    /// Matches classified high-complexity, in scan order
    pub high: Vec<DecomposedWord>,
    /// Non-fatal conditions met while scoring
    pub diagnostics: Vec<Diagnostic>,
}

impl SentenceResult {
    /// Number of low-complexity matches
    pub fn low_count(&self) -> usize {
        self.low.len()
    }

    /// Number of high-complexity matches
    pub fn high_count(&self) -> usize {
        self.high.len()
    }
}

/// Scanner applying the three detectors over a shared lexicon
pub struct SentenceScanner<'a> {
    lexicon: &'a Lexicon,
    exceptions: ExceptionDetector<'a>,
    superlatives: SuperlativeDetector<'a>,
    engine: DecompositionEngine<'a>,
}

impl<'a> SentenceScanner<'a> {
    /// Create a scanner over a compiled lexicon
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            exceptions: ExceptionDetector::new(lexicon),
            superlatives: SuperlativeDetector::new(lexicon),
            engine: DecompositionEngine::new(lexicon),
        }
    }

    /// Scan a tokenized sentence and classify every recorded match
    pub fn scan<S: AsRef<str>>(&self, sentence: &str, tokens: &[S]) -> SentenceResult {
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            // Exception sequences are skipped before any other check runs
            // and are never recorded.
            let skip = self.exceptions.check(tokens, i);
            if skip > 0 {
                i += skip;
                continue;
            }

            if let Some(word) = self.superlatives.check(tokens, i) {
                i += word.consumed;
                matches.push(word);
                continue;
            }

            if let Some(word) = self.engine.check(tokens, i) {
                i += word.consumed;
                matches.push(word);
                continue;
            }

            i += 1;
        }

        self.partition(sentence, tokens, matches)
    }

    fn partition<S: AsRef<str>>(
        &self,
        sentence: &str,
        tokens: &[S],
        matches: Vec<DecomposedWord>,
    ) -> SentenceResult {
        let mut low = Vec::new();
        let mut high = Vec::new();
        let mut diagnostics = Vec::new();

        for word in matches {
            match complexity_of(self.lexicon, &word, &mut diagnostics) {
                Some(Complexity::Low) => low.push(word),
                Some(Complexity::High) => high.push(word),
                // Unscorable: treated as though it never existed.
                None => {}
            }
        }

        SentenceResult {
            sentence: sentence.to_string(),
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
            low,
            high,
            diagnostics,
        }
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

            [exceptions]
            sequences = ["deep blue"]
        "#,
        )
        .unwrap()
    }

    #[test]
    fn cursor_advances_by_one_on_unknown_tokens() {
        let lexicon = lexicon();
        let scanner = SentenceScanner::new(&lexicon);

        let result = scanner.scan("nothing matches here", &["nothing", "matches", "here"]);
        assert!(result.low.is_empty());
        assert!(result.high.is_empty());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn exceptions_are_skipped_silently() {
        let lexicon = lexicon();
        let scanner = SentenceScanner::new(&lexicon);

        // "deep blue" would otherwise start a decomposition probe on
        // "deep"; the exception swallows both tokens instead.
        let result = scanner.scan("deep blue", &["deep", "blue"]);
        assert_eq!(result.low_count(), 0);
        assert_eq!(result.high_count(), 0);
    }

    #[test]
    fn superlative_outranks_decomposition() {
        let lexicon = lexicon();
        let scanner = SentenceScanner::new(&lexicon);

        let result = scanner.scan("knowest", &["knowest"]);
        assert_eq!(result.low_count(), 1);
        assert_eq!(result.low[0].postfix.as_deref(), Some("est"));
    }

    #[test]
    fn matches_partition_in_scan_order() {
        let lexicon = lexicon();
        let scanner = SentenceScanner::new(&lexicon);

        let tokens = ["know", "and", "deep", "think", "and", "know"];
        let result = scanner.scan("know and deep think and know", &tokens);

        assert_eq!(result.low_count(), 2);
        assert_eq!(result.high_count(), 1);
        assert_eq!(result.low[0].stem, vec!["know"]);
        assert_eq!(result.high[0].stem, vec!["deep", "think"]);
    }

    #[test]
    fn consumed_span_is_not_rescanned() {
        let lexicon = lexicon();
        let scanner = SentenceScanner::new(&lexicon);

        // "not" is consumed as trailing negation of "know"; it must not be
        // revisited, and the negated match lands in the high list.
        let result = scanner.scan("know not", &["know", "not"]);
        assert_eq!(result.low_count(), 0);
        assert_eq!(result.high_count(), 1);
        assert_eq!(result.high[0].negation, Some(vec!["not".to_string()]));
    }

    #[test]
    fn superlative_with_unknown_stem_still_scores_low() {
        let lexicon = lexicon();
        let scanner = SentenceScanner::new(&lexicon);

        // "great" is in neither classification set, but the superlative
        // override classifies without looking at the stem, so no
        // diagnostic is recorded.
        let result = scanner.scan("greatest", &["greatest"]);
        assert_eq!(result.low_count(), 1);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn original_sentence_and_tokens_are_preserved() {
        let lexicon = lexicon();
        let scanner = SentenceScanner::new(&lexicon);

        let result = scanner.scan("know this.", &["know", "this"]);
        assert_eq!(result.sentence, "know this.");
        assert_eq!(result.tokens, vec!["know", "this"]);
    }
}
