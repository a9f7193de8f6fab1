//! Token-sequence trie
//!
//! Accepts ordered sequences of whole tokens. Used for complexity words,
//! exception words, and negating-verb sequences.

use std::collections::HashMap;

/// Trie node in contiguous storage, children addressed by index
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: token -> node index
    children: HashMap<String, u32>,
    /// Whether an inserted sequence ends at this node
    accepting: bool,
}

/// Trie over token sequences with longest-match queries
///
/// Insertion order does not matter and duplicate inserts are no-ops.
/// Token comparison is exact and case-sensitive; any normalization must
/// happen before tokens reach the trie.
#[derive(Debug, Clone)]
pub struct TokenTrie {
    /// All nodes in contiguous storage; index 0 is the root
    nodes: Vec<TrieNode>,
}

impl TokenTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a token sequence as an accepting path
    ///
    /// Zero-length sequences are ignored: the root must never become an
    /// accepting state, or every position would match an empty word.
    pub fn insert<S: AsRef<str>>(&mut self, sequence: &[S]) {
        if sequence.is_empty() {
            return;
        }

        let mut current = 0u32;
        for token in sequence {
            let token = token.as_ref();
            let next = match self.nodes[current as usize].children.get(token) {
                Some(&idx) => idx,
                None => {
                    let idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current as usize]
                        .children
                        .insert(token.to_string(), idx);
                    idx
                }
            };
            current = next;
        }
        self.nodes[current as usize].accepting = true;
    }

    /// Whether the one-token path from the root is accepting
    pub fn is_single_accepted(&self, token: &str) -> bool {
        match self.nodes[0].children.get(token) {
            Some(&idx) => self.nodes[idx as usize].accepting,
            None => false,
        }
    }

    /// Greatest `k` such that `tokens[start..start + k]` is an accepting
    /// path, or 0 if none (including when `start` is out of range)
    pub fn longest_match<S: AsRef<str>>(&self, tokens: &[S], start: usize) -> usize {
        if start >= tokens.len() {
            return 0;
        }
        self.walk(tokens[start..].iter().map(|t| t.as_ref()))
    }

    /// Longest match where the first token is `head` instead of the token
    /// stored in the buffer, continuing into `tail`
    ///
    /// This is how the decomposition engine probes affix-stripped forms
    /// without rewriting the token buffer.
    pub fn longest_match_with_head<'a, S: AsRef<str>>(&self, head: &'a str, tail: &'a [S]) -> usize {
        self.walk(std::iter::once(head).chain(tail.iter().map(|t| t.as_ref())))
    }

    fn walk<'a>(&self, tokens: impl Iterator<Item = &'a str>) -> usize {
        let mut current = 0u32;
        let mut longest = 0;

        for (offset, token) in tokens.enumerate() {
            match self.nodes[current as usize].children.get(token) {
                Some(&idx) => current = idx,
                None => return longest,
            }
            if self.nodes[current as usize].accepting {
                longest = offset + 1;
            }
        }
        longest
    }
}

impl Default for TokenTrie {
    fn default() -> Self {
        Self::new()
    }
}
