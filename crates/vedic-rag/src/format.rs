//! Corpus block format
//!
//! A corpus file is a sequence of blocks of `Key: Value` lines, each block
//! closed by a line holding only `---`.

use vedic_core::VerseRecord;

/// Block separator line
pub const SEPARATOR: &str = "---";

/// Parse one block of `Key: Value` lines.
///
/// Lines without a colon are ignored. Returns `None` when no line yields a
/// key/value pair.
pub fn parse_block(block: &str) -> Option<VerseRecord> {
    parse_lines(block.lines())
}

/// Parse a whole corpus file into records, in block order
pub fn parse_corpus(text: &str) -> Vec<VerseRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim() == SEPARATOR {
            records.extend(parse_lines(block.drain(..)));
        } else {
            block.push(line);
        }
    }
    records.extend(parse_lines(block.drain(..)));

    records
}

/// Render a record as a block, separator included.
///
/// Named fields come first in canonical order, then extra fields by key.
/// Line breaks inside values are folded to spaces.
pub fn render_block(record: &VerseRecord) -> String {
    let mut block = String::new();

    for (key, value) in record.fields() {
        let key = if VerseRecord::KNOWN_FIELDS.contains(&key) {
            capitalize(key)
        } else {
            key.to_string()
        };
        block.push_str(&format!("{}: {}\n", key, fold_lines(value)));
    }

    block.push_str(SEPARATOR);
    block.push('\n');
    block
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Option<VerseRecord> {
    let mut record = VerseRecord::new();

    for line in lines {
        if let Some((key, value)) = line.split_once(':') {
            record.set_field(key, value);
        }
    }

    if record.is_empty() { None } else { Some(record) }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fold_lines(value: &str) -> String {
    value.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITA_BLOCK: &str = "Source: Bhagavad Gita\n\
        Category: Bhagavad Gita\n\
        Title: Chapter 2, Verse 47\n\
        Verse: 2.47\n\
        English: You have a right to perform your prescribed duties\n";

    #[test]
    fn test_parse_block() {
        let record = parse_block(GITA_BLOCK).unwrap();

        assert_eq!(record.source.as_deref(), Some("Bhagavad Gita"));
        assert_eq!(record.title.as_deref(), Some("Chapter 2, Verse 47"));
        assert_eq!(record.verse.as_deref(), Some("2.47"));
        assert_eq!(record.sanskrit, None);
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let record = parse_block("English: Arise: awake: and stop not").unwrap();
        assert_eq!(record.english.as_deref(), Some("Arise: awake: and stop not"));
    }

    #[test]
    fn test_block_without_pairs_is_dropped() {
        assert!(parse_block("just some prose\nwith no fields").is_none());
        assert!(parse_block("").is_none());
    }

    #[test]
    fn test_parse_corpus_skips_blank_and_malformed_blocks() {
        let text = format!(
            "{GITA_BLOCK}---\n\n---\nnot a field line\n---\nSource: Vedas\nCategory: Veda\n---\n"
        );

        let records = parse_corpus(&text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source.as_deref(), Some("Bhagavad Gita"));
        assert_eq!(records[1].category.as_deref(), Some("Veda"));
    }

    #[test]
    fn test_parse_corpus_without_trailing_separator() {
        let records = parse_corpus("Title: A\n---\nTitle: B");
        let titles: Vec<_> = records.iter().filter_map(|r| r.title.as_deref()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_dashes_inside_values_do_not_split() {
        let records = parse_corpus("English: the path --- sharp as a razor\nTitle: Katha\n---\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].english.as_deref(), Some("the path --- sharp as a razor"));
    }

    #[test]
    fn test_crlf_and_bom() {
        let records = parse_corpus("\u{feff}Source: Vedas\r\nTitle: RV 1.1.1\r\n---\r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source.as_deref(), Some("Vedas"));
        assert_eq!(records[0].title.as_deref(), Some("RV 1.1.1"));
    }

    #[test]
    fn test_render_block_order_and_extras() {
        let record = VerseRecord::new()
            .with_field("english", "The whole remains")
            .with_field("translator", "Swami Nikhilananda")
            .with_field("title", "Isha Upanishad, Verse 1");

        assert_eq!(
            render_block(&record),
            "Title: Isha Upanishad, Verse 1\n\
             English: The whole remains\n\
             translator: Swami Nikhilananda\n\
             ---\n"
        );
    }

    #[test]
    fn test_render_folds_multiline_values() {
        let record = VerseRecord::new().with_field("english", "line one\n---\nline two");
        let rendered = render_block(&record);

        assert_eq!(rendered, "English: line one --- line two\n---\n");
        assert_eq!(parse_corpus(&rendered), vec![record_with_english("line one --- line two")]);
    }

    #[test]
    fn test_round_trip() {
        let original = parse_block(GITA_BLOCK).unwrap().with_field("Sanskrit", "कर्मण्येवाधिकारस्ते");
        let reparsed = parse_corpus(&render_block(&original));
        assert_eq!(reparsed, vec![original]);
    }

    fn record_with_english(english: &str) -> VerseRecord {
        VerseRecord::new().with_field("english", english)
    }
}
