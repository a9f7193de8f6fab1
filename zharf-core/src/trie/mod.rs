//! Trie structures backing the lexicon
//!
//! Both tries use contiguous node storage with index-based children.
//! Lookups never allocate except where a result vector is returned.

pub mod chars;
pub mod sequence;

pub use chars::{CharTrie, Direction};
pub use sequence::TokenTrie;
