//! Character trie with directional traversal
//!
//! Backs the prefix and postfix tables. Prefixes are inserted and queried
//! reading forward from the start of a token; postfixes are inserted and
//! queried reading backward from the end. An entry inserted in one
//! direction must be queried in the same direction.

use std::collections::HashMap;

/// Traversal direction for insertion and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Read characters left to right from the start of the text
    Forward,
    /// Read characters right to left from the end of the text
    Reverse,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    accepting: bool,
}

/// Trie over character sequences
///
/// All lengths taken and returned are byte lengths of the matched text,
/// so results can slice the probed `&str` directly. Matches always end on
/// character boundaries, so those slices are valid.
#[derive(Debug, Clone)]
pub struct CharTrie {
    nodes: Vec<TrieNode>,
}

impl CharTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a character sequence read in the given direction
    ///
    /// Empty entries are ignored so the root never accepts.
    pub fn insert(&mut self, text: &str, direction: Direction) {
        if text.is_empty() {
            return;
        }

        let mut current = 0u32;
        for ch in DirChars::new(text, direction) {
            let next = match self.nodes[current as usize].children.get(&ch) {
                Some(&idx) => idx,
                None => {
                    let idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current as usize].children.insert(ch, idx);
                    idx
                }
            };
            current = next;
        }
        self.nodes[current as usize].accepting = true;
    }

    /// Byte length of the longest accepted run, walking from the anchor end
    /// of `text` in the given direction; 0 if none
    pub fn longest_accepted_len(&self, text: &str, direction: Direction) -> usize {
        let mut current = 0u32;
        let mut walked = 0;
        let mut longest = 0;

        for ch in DirChars::new(text, direction) {
            match self.nodes[current as usize].children.get(&ch) {
                Some(&idx) => current = idx,
                None => return longest,
            }
            walked += ch.len_utf8();
            if self.nodes[current as usize].accepting {
                longest = walked;
            }
        }
        longest
    }

    /// Every byte length at which an accepting state is reached while
    /// walking `text` in the given direction, in ascending order
    ///
    /// Affix stripping needs all candidates, not just the longest: a
    /// shorter affix may leave a valid stem where a longer one does not.
    pub fn all_accepted_lengths(&self, text: &str, direction: Direction) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut current = 0u32;
        let mut walked = 0;

        for ch in DirChars::new(text, direction) {
            match self.nodes[current as usize].children.get(&ch) {
                Some(&idx) => current = idx,
                None => return lengths,
            }
            walked += ch.len_utf8();
            if self.nodes[current as usize].accepting {
                lengths.push(walked);
            }
        }
        lengths
    }
}

impl Default for CharTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Character iterator over either end of a string
enum DirChars<'a> {
    Forward(std::str::Chars<'a>),
    Reverse(std::iter::Rev<std::str::Chars<'a>>),
}

impl<'a> DirChars<'a> {
    fn new(text: &'a str, direction: Direction) -> Self {
        match direction {
            Direction::Forward => DirChars::Forward(text.chars()),
            Direction::Reverse => DirChars::Reverse(text.chars().rev()),
        }
    }
}

impl Iterator for DirChars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            DirChars::Forward(it) => it.next(),
            DirChars::Reverse(it) => it.next(),
        }
    }
}
