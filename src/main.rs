use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vedic_cli::{print_stats, run_interactive};
use vedic_core::{Error, RagConfig};
use vedic_rag::{
    Corpus, DEFAULT_MAX_ENTRIES_PER_FILE, DatasetWriter, QueryResponder, VerseRetriever,
    sample_verses,
};

#[derive(Parser)]
#[command(name = "vedic")]
#[command(about = "Ask questions of a Sanskrit/Vedic verse corpus", long_about = None)]
struct Cli {
    /// Answer a single query and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Number of verses to include in a response
    #[arg(short = 'n', long, value_parser = parse_positive)]
    max_verses: Option<usize>,

    /// Directory holding the corpus files
    #[arg(short, long)]
    dataset_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in sample verses as a dataset
    Seed {
        /// Output directory (defaults to the dataset directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum verses per corpus file
        #[arg(long, default_value_t = DEFAULT_MAX_ENTRIES_PER_FILE, value_parser = parse_positive)]
        max_per_file: usize,
    },
    /// Show corpus statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = RagConfig::from_env()?;
    if let Some(dir) = cli.dataset_dir {
        config.dataset_dir = dir;
    }
    if let Some(max_verses) = cli.max_verses {
        config.max_verses = max_verses;
    }

    debug!("Dataset directory: {}", config.dataset_dir.display());

    let show_stats = match cli.command {
        Some(Commands::Seed { output, max_per_file }) => {
            return seed(&config, output, max_per_file);
        }
        Some(Commands::Stats) => true,
        None => false,
    };

    let corpus = match Corpus::from_config(&config) {
        Ok(corpus) => corpus,
        Err(Error::CorpusNotFound(dir)) => {
            eprintln!(
                "{} Dataset not found at '{}'! Run `vedic seed` or point --dataset-dir at a corpus.",
                "❌".red(),
                dir.display()
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if show_stats {
        print_stats(corpus.len(), corpus.metadata());
        return Ok(());
    }

    let responder = QueryResponder::new(&corpus);

    if let Some(query) = cli.query {
        println!("{}", responder.generate_response(&query, config.max_verses));
        return Ok(());
    }

    run_interactive(&responder, config.max_verses, corpus.metadata())?;
    Ok(())
}

/// Write the built-in sample verses as a dataset
fn seed(config: &RagConfig, output: Option<PathBuf>, max_per_file: usize) -> Result<()> {
    let mut writer = DatasetWriter::from_config(config).with_max_entries_per_file(max_per_file);
    if let Some(output) = output {
        writer = writer.with_output_dir(output);
    }

    let metadata = writer.write(&sample_verses())?;
    println!(
        "{} Wrote {} verses to '{}'",
        "✅".green(),
        metadata.total_verses,
        writer.output_dir().display()
    );
    print_stats(metadata.total_verses, Some(&metadata));
    Ok(())
}

fn parse_positive(raw: &str) -> std::result::Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, got '{}'", raw)),
    }
}
