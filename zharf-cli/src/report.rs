//! Per-file and batch statistics
//!
//! Mirrors how results roll up: sentence results aggregate into a file
//! report, file reports into a batch report. The complexity score is the
//! share of high-complexity matches among all classified matches.

use serde::Serialize;
use zharf_core::SentenceResult;

/// Analysis results for one input file
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path of the analyzed file
    pub path: String,
    /// Per-sentence results in file order
    pub sentences: Vec<SentenceResult>,
    /// Total token count across all sentences
    pub token_count: usize,
    /// Total low-complexity matches
    pub low_count: usize,
    /// Total high-complexity matches
    pub high_count: usize,
    /// high / (low + high), or 0 when nothing matched
    pub complexity_score: f64,
}

impl FileReport {
    /// Aggregate sentence results into a file report
    pub fn new(path: String, sentences: Vec<SentenceResult>) -> Self {
        let token_count = sentences.iter().map(|s| s.tokens.len()).sum();
        let low_count = sentences.iter().map(|s| s.low_count()).sum();
        let high_count = sentences.iter().map(|s| s.high_count()).sum();

        Self {
            path,
            sentences,
            token_count,
            low_count,
            high_count,
            complexity_score: score(low_count, high_count),
        }
    }
}

/// Aggregated results across every analyzed file
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// One report per successfully analyzed file
    pub files: Vec<FileReport>,
    /// Total token count across all files
    pub token_count: usize,
    /// Total low-complexity matches
    pub low_count: usize,
    /// Total high-complexity matches
    pub high_count: usize,
    /// Overall high / (low + high)
    pub complexity_score: f64,
}

impl BatchReport {
    /// Aggregate file reports into a batch report
    pub fn new(files: Vec<FileReport>) -> Self {
        let token_count = files.iter().map(|f| f.token_count).sum();
        let low_count = files.iter().map(|f| f.low_count).sum();
        let high_count = files.iter().map(|f| f.high_count).sum();

        Self {
            files,
            token_count,
            low_count,
            high_count,
            complexity_score: score(low_count, high_count),
        }
    }
}

fn score(low: usize, high: usize) -> f64 {
    let total = low + high;
    if total == 0 {
        return 0.0;
    }
    high as f64 / total as f64
}
