//! Core matching and scoring engine for zharf
//!
//! zharf scores tokenized sentences for conceptual complexity by
//! recognizing lexicon words that may appear whole, with a detachable
//! affix token, or with affixes fused onto the word itself, and combining
//! their polarity with any trailing negation.
//!
//! The crate consumes pre-tokenized, pre-normalized sentences together
//! with a compiled [`Lexicon`]; tokenization, normalization, and file
//! handling live in the callers (see the `zharf` CLI).
//!
//! ```
//! use zharf_core::{Lexicon, SentenceScanner};
//!
//! let lexicon = Lexicon::from_toml_str(r#"
//!     [metadata]
//!     code = "xx"
//!     name = "Example"
//!
//!     [words]
//!     low = ["know"]
//!     high = ["deep think"]
//!
//!     [affixes]
//!     prefixes = { "un" = -1 }
//!     postfixes = { "ly" = 1 }
//!     superlative = "est"
//! "#).unwrap();
//!
//! let scanner = SentenceScanner::new(&lexicon);
//! let result = scanner.scan("unknowly", &["unknowly"]);
//! assert_eq!(result.high_count(), 1);
//! ```

pub mod decompose;
pub mod error;
pub mod exception;
pub mod lexicon;
pub mod scanner;
pub mod score;
pub mod superlative;
pub mod trie;

pub use decompose::{DecomposedWord, DecompositionEngine};
pub use error::LexiconError;
pub use exception::ExceptionDetector;
pub use lexicon::{Lexicon, LexiconConfig};
pub use scanner::{SentenceResult, SentenceScanner};
pub use score::{complexity_of, Complexity, Diagnostic};
pub use superlative::SuperlativeDetector;
pub use trie::{CharTrie, Direction, TokenTrie};
