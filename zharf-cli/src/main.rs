//! Command-line entry point for the zharf complexity scorer

use clap::Parser;

use zharf_cli::commands::Commands;

/// Conceptual complexity scoring for tokenized text
#[derive(Debug, Parser)]
#[command(name = "zharf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
