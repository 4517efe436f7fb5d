//! Verse record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parsed unit of the corpus.
///
/// The conventional fields are named; any other key found in a block is kept in
/// `extra` under its lower-cased name. No field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanskrit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl VerseRecord {
    /// Keys with a dedicated field, in canonical block order
    pub const KNOWN_FIELDS: [&'static str; 6] =
        ["source", "category", "title", "verse", "sanskrit", "english"];

    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field by name.
    ///
    /// The key is trimmed and lower-cased, the value trimmed. A repeated key
    /// overwrites the earlier value.
    pub fn set_field(&mut self, key: &str, value: &str) {
        let key = key.trim().to_lowercase();
        let value = value.trim().to_string();

        match key.as_str() {
            "source" => self.source = Some(value),
            "category" => self.category = Some(value),
            "title" => self.title = Some(value),
            "verse" => self.verse = Some(value),
            "sanskrit" => self.sanskrit = Some(value),
            "english" => self.english = Some(value),
            _ => {
                self.extra.insert(key, value);
            }
        }
    }

    /// Builder-style variant of [`set_field`](Self::set_field)
    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.set_field(key, value);
        self
    }

    /// Look up a field by case-insensitive name
    pub fn field(&self, key: &str) -> Option<&str> {
        let key = key.trim().to_lowercase();
        let named = match key.as_str() {
            "source" => &self.source,
            "category" => &self.category,
            "title" => &self.title,
            "verse" => &self.verse,
            "sanskrit" => &self.sanskrit,
            "english" => &self.english,
            _ => return self.extra.get(&key).map(String::as_str),
        };
        named.as_deref()
    }

    /// Iterate over all present fields: named ones in canonical order, then extras by key
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        Self::KNOWN_FIELDS
            .iter()
            .filter_map(move |key| self.field(key).map(|value| (*key, value)))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Number of fields that are set
    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}

/// A verse record paired with its relevance score for one query.
///
/// Holds its own copy of the record so the stored corpus is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredVerse {
    #[serde(flatten)]
    pub record: VerseRecord,
    pub relevance_score: u32,
}

impl ScoredVerse {
    pub fn new(record: VerseRecord, relevance_score: u32) -> Self {
        Self {
            record,
            relevance_score,
        }
    }
}
