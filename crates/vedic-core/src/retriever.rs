//! Verse retriever trait

use crate::ScoredVerse;

/// Trait for verse retrievers
///
/// A retriever ranks the verses it holds against a free-text query and renders
/// the best of them into a response. Retrieval never fails: no matches is an
/// ordinary outcome.
pub trait VerseRetriever {
    /// Rank verses for a query, best first, at most `max_results`
    fn search(&self, query: &str, max_results: usize) -> Vec<ScoredVerse>;

    /// Render a response for a query from at most `max_verses` verses
    fn generate_response(&self, query: &str, max_verses: usize) -> String;

    /// Build a plain context block from ranked verses
    fn build_context(&self, verses: &[ScoredVerse]) -> String;

    /// Number of verses available for retrieval
    fn verse_count(&self) -> usize;
}
