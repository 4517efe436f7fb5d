//! Keyword retrieval engine for the Vedic verse corpus
//!
//! This crate reads the flat-text corpus into memory, ranks verses against a
//! query by literal word overlap, renders the results, and writes corpora in
//! the same block format.

mod dataset;
mod format;
mod loader;
mod responder;


pub use dataset::{DEFAULT_MAX_ENTRIES_PER_FILE, DatasetWriter, sample_verses};
pub use format::{SEPARATOR, parse_block, parse_corpus, render_block};
pub use loader::{Corpus, FileNaming, discover_corpus_files};
pub use responder::{NOT_FOUND_MESSAGE, QueryResponder, tokenize};

// Re-export core types for convenience
pub use vedic_core::{
    DatasetMetadata, Error, RagConfig, Result, ScoredVerse, VerseRecord, VerseRetriever,
};
