//! Runtime configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::{Error, Result};

pub const DEFAULT_DATASET_DIR: &str = "vedic_texts";
pub const DEFAULT_FILE_PREFIX: &str = "vedic_corpus_part_";
pub const DEFAULT_FILE_SUFFIX: &str = ".txt";
pub const DEFAULT_METADATA_FILE: &str = "dataset_metadata.json";
pub const DEFAULT_MAX_VERSES: usize = 3;

/// Configuration for corpus loading and query answering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagConfig {
    pub dataset_dir: PathBuf,
    pub file_prefix: String,
    pub file_suffix: String,
    pub metadata_file: String,
    pub max_verses: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from(DEFAULT_DATASET_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            max_verses: DEFAULT_MAX_VERSES,
        }
    }
}

impl RagConfig {
    /// Create configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_verses = match lookup("VEDIC_MAX_VERSES") {
            Some(raw) => parse_max_verses(&raw)?,
            None => defaults.max_verses,
        };

        Ok(Self {
            dataset_dir: lookup("VEDIC_DATASET_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset_dir),
            file_prefix: lookup("VEDIC_FILE_PREFIX").unwrap_or(defaults.file_prefix),
            file_suffix: lookup("VEDIC_FILE_SUFFIX").unwrap_or(defaults.file_suffix),
            metadata_file: lookup("VEDIC_METADATA_FILE").unwrap_or(defaults.metadata_file),
            max_verses,
        })
    }

    /// Full path of the metadata file
    pub fn metadata_path(&self) -> PathBuf {
        self.dataset_dir.join(&self.metadata_file)
    }
}

fn parse_max_verses(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Configuration(format!(
            "VEDIC_MAX_VERSES must be a positive integer, got '{}'",
            raw
        ))),
    }
}
