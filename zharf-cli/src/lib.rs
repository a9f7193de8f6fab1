//! Zharf CLI library
//!
//! This library provides the command-line interface for the zharf
//! conceptual complexity scorer.

pub mod commands;
pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod report;
pub mod tokenize;

pub use error::{CliError, CliResult};
