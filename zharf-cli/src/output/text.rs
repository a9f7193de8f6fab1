//! Plain text output formatter

use super::OutputFormatter;
use crate::report::{BatchReport, FileReport};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - per-file summaries followed by totals
pub struct TextFormatter<W: Write> {
    writer: W,
    /// Also print every classified match, one per line
    verbose_matches: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, verbose_matches: bool) -> Self {
        Self {
            writer,
            verbose_matches,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(verbose_matches: bool) -> Self {
        Self::new(io::stdout(), verbose_matches)
    }
}

impl<W: Write> TextFormatter<W> {
    fn format_file(&mut self, file: &FileReport) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {} tokens, {} low, {} high, score {:.3}",
            file.path, file.token_count, file.low_count, file.high_count, file.complexity_score
        )?;

        if self.verbose_matches {
            for sentence in &file.sentences {
                for word in &sentence.low {
                    writeln!(self.writer, "  low   {}", word)?;
                }
                for word in &sentence.high {
                    writeln!(self.writer, "  high  {}", word)?;
                }
                for diagnostic in &sentence.diagnostics {
                    writeln!(self.writer, "  note  {}", diagnostic)?;
                }
            }
        }

        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &BatchReport) -> Result<()> {
        for file in &report.files {
            self.format_file(file)?;
        }

        if report.files.len() > 1 {
            writeln!(
                self.writer,
                "total: {} tokens, {} low, {} high, score {:.3}",
                report.token_count, report.low_count, report.high_count, report.complexity_score
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{BatchReport, FileReport};

    #[test]
    fn test_single_file_has_no_total_line() {
        let report = BatchReport::new(vec![FileReport::new("a.txt".to_string(), Vec::new())]);

        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer, false)
            .format_report(&report)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("a.txt:"));
        assert!(!output.contains("total:"));
    }

    #[test]
    fn test_multiple_files_end_with_total() {
        let report = BatchReport::new(vec![
            FileReport::new("a.txt".to_string(), Vec::new()),
            FileReport::new("b.txt".to_string(), Vec::new()),
        ]);

        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer, false)
            .format_report(&report)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("b.txt:"));
        assert!(output.trim_end().ends_with("score 0.000"));
        assert!(output.contains("total:"));
    }
}
