//! Keyword scoring and response rendering

use std::collections::HashSet;
use tracing::debug;

use vedic_core::{ScoredVerse, VerseRecord, VerseRetriever};

use crate::loader::Corpus;

/// Returned by [`QueryResponder::generate_response`] when nothing matches
pub const NOT_FOUND_MESSAGE: &str =
    "I couldn't find relevant verses for your query. Please try different keywords.";

const CATEGORY_BOOST: u32 = 2;
const SOURCE_BOOST: u32 = 2;

/// Lower-case a text and split it on whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Answers queries against a loaded corpus
pub struct QueryResponder<'a> {
    corpus: &'a Corpus,
}

impl<'a> QueryResponder<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    /// Score one record against a query.
    ///
    /// Each query token (repeats included) found verbatim among the record's
    /// English tokens adds 1. The whole query appearing inside the category or
    /// the source adds 2 each; the empty query is a substring of any value.
    pub fn score(record: &VerseRecord, query: &str) -> u32 {
        let query_lower = query.to_lowercase();
        let mut score = 0;

        if let Some(english) = &record.english {
            let english_words: HashSet<String> = tokenize(english).into_iter().collect();
            let matched = tokenize(&query_lower)
                .iter()
                .filter(|word| english_words.contains(*word))
                .count();
            score += matched as u32;
        }

        if contains_lower(record.category.as_deref(), &query_lower) {
            score += CATEGORY_BOOST;
        }
        if contains_lower(record.source.as_deref(), &query_lower) {
            score += SOURCE_BOOST;
        }

        score
    }
}

impl VerseRetriever for QueryResponder<'_> {
    fn search(&self, query: &str, max_results: usize) -> Vec<ScoredVerse> {
        let mut relevant: Vec<ScoredVerse> = self
            .corpus
            .verses()
            .iter()
            .filter_map(|verse| {
                let score = Self::score(verse, query);
                (score > 0).then(|| ScoredVerse::new(verse.clone(), score))
            })
            .collect();

        debug!("{} verses matched '{}'", relevant.len(), query);

        relevant.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        relevant.truncate(max_results);
        relevant
    }

    fn generate_response(&self, query: &str, max_verses: usize) -> String {
        let verses = self.search(query, max_verses);

        if verses.is_empty() {
            return NOT_FOUND_MESSAGE.to_string();
        }

        let mut response = format!(
            "🕉️ Based on your query about '{}', here are some relevant teachings from the Vedic scriptures:\n\n",
            query
        );

        for (i, scored) in verses.iter().enumerate() {
            let verse = &scored.record;
            response.push_str(&format!("**{}. {}**\n", i + 1, or_unknown(&verse.title)));
            response.push_str(&format!(
                "Source: {} ({})\n\n",
                or_unknown(&verse.source),
                or_unknown(&verse.category)
            ));
            response.push_str(&format!("**Sanskrit:**\n{}\n\n", or_na(&verse.sanskrit)));
            response.push_str(&format!(
                "**English Translation:**\n{}\n\n",
                or_na(&verse.english)
            ));
            response.push_str("---\n\n");
        }

        response.push_str("**Reflection:**\n");
        response.push_str("These verses offer timeless wisdom that can be applied to modern life. ");
        response.push_str(
            "Consider how these teachings relate to your situation and contemplate their deeper meaning.\n\n",
        );
        response.push_str(
            "Would you like me to search for verses on a different topic or explore another aspect of Vedic wisdom?",
        );

        response
    }

    fn build_context(&self, verses: &[ScoredVerse]) -> String {
        if verses.is_empty() {
            return String::new();
        }

        let mut context = String::from("Relevant verses from the Vedic corpus:\n\n");

        for (i, scored) in verses.iter().enumerate() {
            let verse = &scored.record;
            context.push_str(&format!("{}. ", i + 1));

            if let Some(title) = &verse.title {
                context.push_str(&format!("[{}] ", title));
            }
            if let Some(source) = &verse.source {
                context.push_str(&format!("({}) ", source));
            }

            context.push_str(or_na(&verse.english));
            context.push_str("\n\n");
        }

        context
    }

    fn verse_count(&self) -> usize {
        self.corpus.len()
    }
}

fn contains_lower(field: Option<&str>, query_lower: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(query_lower))
}

fn or_unknown(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("Unknown")
}

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("N/A")
}
