//! Interactive question loop

use colored::*;
use tracing::debug;
use vedic_core::{DatasetMetadata, Result, VerseRetriever};

use crate::ui::{display_banner, print_help, print_stats, read_input_with_history};

/// Words that end the interactive session, compared case-insensitively
pub const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// One line of interactive input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Empty,
    Help,
    Stats,
    Query(String),
}

/// Classify a line of input
pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    let lower = line.to_lowercase();

    if line.is_empty() {
        ReplCommand::Empty
    } else if QUIT_WORDS.contains(&lower.as_str()) {
        ReplCommand::Quit
    } else if lower == "help" {
        ReplCommand::Help
    } else if lower == "stats" {
        ReplCommand::Stats
    } else {
        ReplCommand::Query(line.to_string())
    }
}

/// Run the interactive loop until a quit word or end of input
pub fn run_interactive<R: VerseRetriever>(
    retriever: &R,
    max_verses: usize,
    metadata: Option<&DatasetMetadata>,
) -> Result<()> {
    display_banner(retriever.verse_count());

    let mut history = Vec::new();
    let rule = "=".repeat(50);

    loop {
        let Some(input) = read_input_with_history(&mut history)? else {
            break;
        };

        match parse_command(&input) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::Stats => print_stats(retriever.verse_count(), metadata),
            ReplCommand::Query(query) => {
                debug!("Answering '{}' with up to {} verses", query, max_verses);
                println!("\n{}", rule.dimmed());
                println!("{}", retriever.generate_response(&query, max_verses));
                println!("{}\n", rule.dimmed());
            }
        }
    }

    println!(
        "\n{}",
        "🙏 Thank you for exploring Vedic wisdom. May you find peace and guidance!".green()
    );
    Ok(())
}
