//! CLI interface for Vedic verse retrieval

mod repl;
mod ui;

#[cfg(test)]
mod tests;

pub use repl::{QUIT_WORDS, ReplCommand, parse_command, run_interactive};
pub use ui::{display_banner, print_help, print_stats, read_input_with_history};

// Re-export core types
pub use vedic_core::{Error, Result};
