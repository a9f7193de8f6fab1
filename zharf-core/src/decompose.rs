//! Morphological decomposition of complexity words
//!
//! The engine recognizes a complexity word anchored at one token position:
//! whole (one or more tokens), with a disconnected affix token next to it,
//! or with affixes fused onto the token itself. Fused-affix search is a
//! backtracking walk over every candidate affix length, shortest first,
//! because a shorter affix may leave a valid stem where a longer one does
//! not.
//!
//! All probing works on sub-slices of the original token text; the token
//! buffer itself is never touched, so sibling probes and callers always
//! see the original tokens.

use std::fmt;

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::trie::Direction;

/// A recognized complexity word
///
/// Concatenating `prefix` + `stem` + `postfix` (omitting absent parts)
/// reconstructs the original token text for fused-affix matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecomposedWord {
    /// Detached or fused prefix, if any
    pub prefix: Option<String>,
    /// The core token(s) whose classification is looked up; never empty
    pub stem: Vec<String>,
    /// Detached or fused postfix, if any
    pub postfix: Option<String>,
    /// Trailing negating-verb tokens, contiguous after the word's span
    pub negation: Option<Vec<String>>,
    /// Input tokens consumed, counted from the anchor position
    pub consumed: usize,
}

impl fmt::Display for DecomposedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}-")?;
        }
        write!(f, "{}", self.stem.join(" "))?;
        if let Some(postfix) = &self.postfix {
            write!(f, "-{postfix}")?;
        }
        if let Some(negation) = &self.negation {
            write!(f, " -> {}", negation.join(" "))?;
        }
        write!(f, "]")
    }
}

/// Backtracking matcher for complexity words
pub struct DecompositionEngine<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> DecompositionEngine<'a> {
    /// Create an engine over a compiled lexicon
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Find at most one complexity word anchored at `tokens[i]`
    ///
    /// A successful match also absorbs the longest trailing negating-verb
    /// sequence starting right after the word's span.
    pub fn check<S: AsRef<str>>(&self, tokens: &[S], i: usize) -> Option<DecomposedWord> {
        let mut word = self.find_complexity_word(tokens, i)?;

        let after = i + word.consumed;
        let negation_len = self.lexicon.negating_verbs.longest_match(tokens, after);
        if negation_len > 0 {
            word.negation = Some(collect(tokens, after, negation_len));
            word.consumed += negation_len;
        }
        Some(word)
    }

    fn find_complexity_word<S: AsRef<str>>(
        &self,
        tokens: &[S],
        i: usize,
    ) -> Option<DecomposedWord> {
        if i >= tokens.len() {
            return None;
        }
        match self.lexicon.complexity_words.longest_match(tokens, i) {
            // Multi-token direct match: no affix attachment permitted.
            m if m > 1 => Some(DecomposedWord {
                prefix: None,
                stem: collect(tokens, i, m),
                postfix: None,
                negation: None,
                consumed: m,
            }),
            1 => Some(self.direct_single_match(tokens, i)),
            _ => self.integrated_affix_search(tokens, i),
        }
    }

    /// Single-token direct match, with probes for disconnected affixes on
    /// either side
    fn direct_single_match<S: AsRef<str>>(&self, tokens: &[S], i: usize) -> DecomposedWord {
        let prefix = self.disconnected_prefix(tokens, i);
        let postfix = self.disconnected_postfix(tokens, i + 1);
        // The preceding token was already scanned past, so a disconnected
        // prefix never adds to the consumed count.
        let consumed = if postfix.is_some() { 2 } else { 1 };

        DecomposedWord {
            prefix,
            stem: vec![tokens[i].as_ref().to_string()],
            postfix,
            negation: None,
            consumed,
        }
    }

    /// No direct match: look for affixes fused onto the token, postfix
    /// hypotheses first
    fn integrated_affix_search<S: AsRef<str>>(
        &self,
        tokens: &[S],
        i: usize,
    ) -> Option<DecomposedWord> {
        let word = tokens[i].as_ref();
        let postfix_lens = self
            .lexicon
            .postfix_trie
            .all_accepted_lengths(word, Direction::Reverse);

        if postfix_lens.is_empty() {
            return self.integrated_prefix_search(tokens, i);
        }

        for postfix_len in postfix_lens {
            // Candidates ascend; once one covers the whole token there is
            // no room left for a stem at this or any later length.
            if postfix_len >= word.len() {
                return None;
            }
            if let Some(word) = self.with_integrated_postfix(tokens, i, postfix_len) {
                return Some(word);
            }
        }
        None
    }

    /// One postfix hypothesis: strip `postfix_len` bytes off the end and
    /// try to account for what remains
    fn with_integrated_postfix<S: AsRef<str>>(
        &self,
        tokens: &[S],
        i: usize,
        postfix_len: usize,
    ) -> Option<DecomposedWord> {
        let word = tokens[i].as_ref();
        let (residual, postfix) = word.split_at(word.len() - postfix_len);

        // The residual alone is a valid single-token stem.
        if self.lexicon.complexity_words.is_single_accepted(residual) {
            return Some(DecomposedWord {
                prefix: self.disconnected_prefix(tokens, i),
                stem: vec![residual.to_string()],
                postfix: Some(postfix.to_string()),
                negation: None,
                consumed: 1,
            });
        }

        // Layer an integrated prefix on top. A candidate covering the whole
        // residual is still tried: restoring the postfix below can leave a
        // non-empty stem, if a complexity word happens to end in a valid
        // postfix.
        self.lexicon
            .prefix_trie
            .all_accepted_lengths(residual, Direction::Forward)
            .into_iter()
            .find_map(|prefix_len| self.with_both_affixes(tokens, i, residual, postfix, prefix_len))
    }

    /// One prefix hypothesis under a postfix hypothesis
    fn with_both_affixes<S: AsRef<str>>(
        &self,
        tokens: &[S],
        i: usize,
        residual: &str,
        postfix: &str,
        prefix_len: usize,
    ) -> Option<DecomposedWord> {
        let (prefix, inner) = residual.split_at(prefix_len);

        // Both affixes stripped and a single-token stem remains.
        if self.lexicon.complexity_words.is_single_accepted(inner) {
            return Some(DecomposedWord {
                prefix: Some(prefix.to_string()),
                stem: vec![inner.to_string()],
                postfix: Some(postfix.to_string()),
                negation: None,
                consumed: 1,
            });
        }

        // The postfix hypothesis may be wrong: the stripped text could
        // belong to the stem. Restore it and retry a direct match with
        // only the prefix removed.
        let restored = format!("{inner}{postfix}");
        let m = self
            .lexicon
            .complexity_words
            .longest_match_with_head(&restored, &tokens[i + 1..]);
        if m == 0 {
            return None;
        }

        let mut stem = Vec::with_capacity(m);
        stem.push(restored);
        stem.extend(tokens[i + 1..i + m].iter().map(|t| t.as_ref().to_string()));

        let disconnected = self.disconnected_postfix(tokens, i + m);
        let consumed = m + usize::from(disconnected.is_some());

        Some(DecomposedWord {
            prefix: Some(prefix.to_string()),
            stem,
            postfix: disconnected,
            negation: None,
            consumed,
        })
    }

    /// No postfix candidates at all: prefix-only search
    fn integrated_prefix_search<S: AsRef<str>>(
        &self,
        tokens: &[S],
        i: usize,
    ) -> Option<DecomposedWord> {
        let word = tokens[i].as_ref();

        for prefix_len in self
            .lexicon
            .prefix_trie
            .all_accepted_lengths(word, Direction::Forward)
        {
            if prefix_len >= word.len() {
                return None;
            }
            let (prefix, residual) = word.split_at(prefix_len);

            let m = self
                .lexicon
                .complexity_words
                .longest_match_with_head(residual, &tokens[i + 1..]);
            if m > 0 {
                let mut stem = Vec::with_capacity(m);
                stem.push(residual.to_string());
                stem.extend(tokens[i + 1..i + m].iter().map(|t| t.as_ref().to_string()));

                let postfix = self.disconnected_postfix(tokens, i + m);
                let consumed = m + usize::from(postfix.is_some());

                return Some(DecomposedWord {
                    prefix: Some(prefix.to_string()),
                    stem,
                    postfix,
                    negation: None,
                    consumed,
                });
            }
        }
        None
    }

    fn disconnected_prefix<S: AsRef<str>>(&self, tokens: &[S], i: usize) -> Option<String> {
        if i == 0 {
            return None;
        }
        let prev = tokens[i - 1].as_ref();
        self.lexicon.is_prefix(prev).then(|| prev.to_string())
    }

    fn disconnected_postfix<S: AsRef<str>>(&self, tokens: &[S], idx: usize) -> Option<String> {
        let token = tokens.get(idx)?.as_ref();
        self.lexicon.is_postfix(token).then(|| token.to_string())
    }
}

fn collect<S: AsRef<str>>(tokens: &[S], start: usize, len: usize) -> Vec<String> {
    tokens[start..start + len]
        .iter()
        .map(|t| t.as_ref().to_string())
        .collect()
}
