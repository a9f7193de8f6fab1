//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use zharf_core::{Lexicon, LexiconConfig, SentenceScanner};

use crate::input::{resolve_patterns, FileReader};
use crate::normalize::Normalizer;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::report::{BatchReport, FileReport};
use crate::tokenize::{split_sentences, tokenize};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files, directories, or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Lexicon file (default: built-in Persian lexicon)
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print every classified match, not just per-file summaries
    #[arg(short, long)]
    pub matches: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-file summaries, one line each
    Text,
    /// Full report as a JSON object
    Json,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = load_config(self.lexicon.as_deref())?;
        let lexicon = Lexicon::from_config(&config)?;
        let normalizer = Normalizer::from_config(&config.normalization);

        log::info!(
            "Analyzing with lexicon '{}' ({})",
            config.metadata.name,
            config.metadata.code
        );

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to analyze", files.len());

        // Unreadable files are logged and skipped; the batch continues.
        let reports: Vec<FileReport> = files
            .par_iter()
            .filter_map(|path| match analyze_file(path, &lexicon, &normalizer) {
                Ok(report) => Some(report),
                Err(e) => {
                    log::warn!("Skipping {}: {:#}", path.display(), e);
                    None
                }
            })
            .collect();

        if reports.is_empty() {
            anyhow::bail!("No files could be analyzed");
        }

        let batch = BatchReport::new(reports);
        self.write_report(&batch)
    }

    fn write_report(&self, batch: &BatchReport) -> Result<()> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let writer = BufWriter::new(file);
                self.format_into(writer, batch)
            }
            None => self.format_into(std::io::stdout(), batch),
        }
    }

    fn format_into<W: std::io::Write + Send + Sync>(
        &self,
        writer: W,
        batch: &BatchReport,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Text => TextFormatter::new(writer, self.matches).format_report(batch),
            OutputFormat::Json => JsonFormatter::new(writer).format_report(batch),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<LexiconConfig> {
    match path {
        Some(path) => LexiconConfig::from_path(path)
            .with_context(|| format!("Failed to load lexicon: {}", path.display())),
        None => Ok(Lexicon::persian_config()?),
    }
}

fn analyze_file(path: &Path, lexicon: &Lexicon, normalizer: &Normalizer) -> Result<FileReport> {
    let text = FileReader::read_text(path)?;
    let text = normalizer.standardize_punctuation(&text);
    let scanner = SentenceScanner::new(lexicon);

    let mut results = Vec::new();
    for sentence in split_sentences(&text) {
        let cleaned = normalizer.clean(&sentence);
        let tokens = tokenize(&cleaned);
        if tokens.is_empty() {
            continue;
        }
        for token in &tokens {
            normalizer.check_alphabet(token);
        }
        results.push(scanner.scan(&sentence, &tokens));
    }

    Ok(FileReport::new(
        path.to_string_lossy().into_owned(),
        results,
    ))
}
