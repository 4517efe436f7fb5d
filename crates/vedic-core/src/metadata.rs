//! Dataset metadata companion file

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::VerseRecord;

/// Summary written next to the corpus files.
///
/// Only `total_verses` is required when reading; it is used for display counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub total_verses: usize,
    #[serde(default)]
    pub sources: BTreeMap<String, usize>,
    #[serde(default)]
    pub categories: BTreeMap<String, usize>,
    #[serde(default)]
    pub files_created: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl DatasetMetadata {
    /// Tally sources and categories over a set of records
    pub fn from_records(records: &[VerseRecord], files_created: Vec<String>) -> Self {
        let mut metadata = Self {
            total_verses: records.len(),
            files_created,
            ..Default::default()
        };

        for record in records {
            if let Some(source) = &record.source {
                *metadata.sources.entry(source.clone()).or_insert(0) += 1;
            }
            if let Some(category) = &record.category {
                *metadata.categories.entry(category.clone()).or_insert(0) += 1;
            }
        }

        metadata
    }

    /// Stamp the metadata with the current time
    pub fn stamped(mut self) -> Self {
        self.generated_at = Some(Utc::now());
        self
    }
}
