//! Output formatting module

use anyhow::Result;

use crate::report::BatchReport;

/// Trait for report formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the batch report into the writer
    fn format_report(&mut self, report: &BatchReport) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
