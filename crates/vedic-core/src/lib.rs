//! Core traits and types for Vedic verse retrieval
//!
//! This crate defines the verse record model, the dataset metadata file, runtime
//! configuration and the retriever interface shared by the loader, the responder
//! and the command-line front end.

pub mod config;
pub mod error;
pub mod metadata;
pub mod retriever;
pub mod verse;


pub use config::RagConfig;
pub use error::{Error, Result};
pub use metadata::DatasetMetadata;
pub use retriever::VerseRetriever;
pub use verse::{ScoredVerse, VerseRecord};
