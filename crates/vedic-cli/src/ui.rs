//! UI utilities for the CLI

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, IsTerminal, Write};
use vedic_core::{DatasetMetadata, Result};

const PROMPT: &str = "vedic>";

/// Display startup banner
pub fn display_banner(verse_count: usize) {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4)).max(40);
    let inner = banner_width - 2;

    let top_border = format!("┌{}┐", "─".repeat(inner));
    let bottom_border = format!("└{}┘", "─".repeat(inner));
    let empty_line = format!("│{}│", " ".repeat(inner));
    let boxed = |text: &str| {
        let padding = inner.saturating_sub(text.chars().count() + 2);
        format!("│  {}{}│", text, " ".repeat(padding))
    };

    println!();
    println!("{}", top_border.yellow());
    println!("{}", empty_line.yellow());
    println!("{}", boxed("Vedic Wisdom RAG").yellow().bold());
    println!("{}", empty_line.yellow());

    let count_line = format!("{} verses loaded", verse_count);
    let feature_lines = [
        "Ask about life, duty, wisdom, or any topic.",
        "",
        count_line.as_str(),
        "Type 'help' for commands, 'quit' to exit.",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.yellow());
        } else {
            println!("{}", boxed(line).yellow());
        }
    }

    println!("{}", empty_line.yellow());
    println!("{}", bottom_border.yellow());
    println!();
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Ask a question in plain words", "query".green());
    println!("  {} - Show corpus statistics", "stats".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "quit/exit/q".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  courage");
    println!("  duty and righteousness");
    println!("  peace and meditation");
}

/// Display corpus statistics
pub fn print_stats(verse_count: usize, metadata: Option<&DatasetMetadata>) {
    println!("{} {}", "Verses loaded:".bold(), verse_count);

    let Some(metadata) = metadata else {
        println!("{}", "No dataset metadata found.".dimmed());
        return;
    };

    println!("{} {}", "Verses in metadata:".bold(), metadata.total_verses);
    if let Some(generated_at) = metadata.generated_at {
        println!("{} {}", "Generated:".bold(), generated_at.to_rfc3339());
    }
    if !metadata.sources.is_empty() {
        println!("{}", "Sources:".bold());
        for (source, count) in &metadata.sources {
            println!("  {} {}: {} verses", "•".cyan(), source, count);
        }
    }
    if !metadata.categories.is_empty() {
        println!("{}", "Categories:".bold());
        for (category, count) in &metadata.categories {
            println!("  {} {}: {} verses", "•".cyan(), category, count);
        }
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Read one line of input, with history navigation on a terminal.
///
/// Returns `None` at end of input (closed stdin or Ctrl-C/Ctrl-D).
pub fn read_input_with_history(history: &mut Vec<String>) -> Result<Option<String>> {
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(Some(input));
    }

    let raw_mode = RawMode::enable()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;
    let mut cursor_pos = 0;

    redraw(&input)?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match key_event.code {
            KeyCode::Char('c' | 'd') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                drop(raw_mode);
                println!();
                return Ok(None);
            }
            KeyCode::Enter => {
                drop(raw_mode);
                println!();
                let input = input.trim().to_string();
                if !input.is_empty() {
                    history.push(input.clone());
                }
                return Ok(Some(input));
            }
            KeyCode::Char(c) => {
                input.insert(byte_offset(&input, cursor_pos), c);
                cursor_pos += 1;
                redraw(&input)?;
            }
            KeyCode::Backspace if cursor_pos > 0 => {
                cursor_pos -= 1;
                input.remove(byte_offset(&input, cursor_pos));
                redraw(&input)?;
            }
            KeyCode::Up if !history.is_empty() => {
                let new_index = match history_index {
                    None => history.len() - 1,
                    Some(idx) => idx.saturating_sub(1),
                };
                history_index = Some(new_index);
                input = history[new_index].clone();
                cursor_pos = input.chars().count();
                redraw(&input)?;
            }
            KeyCode::Down => {
                if let Some(idx) = history_index {
                    if idx + 1 < history.len() {
                        history_index = Some(idx + 1);
                        input = history[idx + 1].clone();
                    } else {
                        history_index = None;
                        input.clear();
                    }
                    cursor_pos = input.chars().count();
                    redraw(&input)?;
                }
            }
            KeyCode::Esc => {
                drop(raw_mode);
                println!();
                return Ok(Some(String::new()));
            }
            _ => {}
        }
    }
}

fn redraw(input: &str) -> Result<()> {
    print!("\r\x1b[2K{} {}", PROMPT.green().bold(), input);
    io::stdout().flush()?;
    Ok(())
}

fn byte_offset(input: &str, char_pos: usize) -> usize {
    input
        .char_indices()
        .nth(char_pos)
        .map(|(offset, _)| offset)
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_handles_multibyte() {
        let input = "धर्म ok";
        assert_eq!(byte_offset(input, 0), 0);
        assert_eq!(byte_offset(input, 1), "ध".len());
        assert_eq!(byte_offset(input, 100), input.len());
    }
}
