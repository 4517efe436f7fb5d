//! Corpus loader

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use vedic_core::{DatasetMetadata, Error, RagConfig, Result, VerseRecord};

use crate::format::parse_corpus;

/// File naming convention for corpus parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    pub prefix: String,
    pub suffix: String,
}

impl FileNaming {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Whether a file name follows the convention
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.len() >= self.prefix.len() + self.suffix.len()
            && file_name.starts_with(&self.prefix)
            && file_name.ends_with(&self.suffix)
    }

    /// Sort key placing numbered parts in numeric order, others after them by name
    fn sort_key(&self, file_name: &str) -> (u64, String) {
        let number = file_name
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
            .and_then(|middle| middle.parse().ok())
            .unwrap_or(u64::MAX);
        (number, file_name.to_string())
    }

    /// Name of the n-th corpus part
    pub fn part_name(&self, index: usize) -> String {
        format!("{}{}{}", self.prefix, index, self.suffix)
    }
}

impl Default for FileNaming {
    fn default() -> Self {
        let config = RagConfig::default();
        Self::new(config.file_prefix, config.file_suffix)
    }
}

impl From<&RagConfig> for FileNaming {
    fn from(config: &RagConfig) -> Self {
        Self::new(config.file_prefix.clone(), config.file_suffix.clone())
    }
}

/// List the corpus files of a directory in part order.
///
/// Parts are ordered by their number, then by name, so the result does not
/// depend on directory iteration order.
pub fn discover_corpus_files(dir: &Path, naming: &FileNaming) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_str().is_some_and(|name| naming.matches(name)) {
            files.push(entry.path());
        }
    }

    files.sort_by_cached_key(|path| {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        naming.sort_key(&name)
    });
    Ok(files)
}

/// In-memory verse corpus, read-only once loaded
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    verses: Vec<VerseRecord>,
    metadata: Option<DatasetMetadata>,
    files: Vec<PathBuf>,
}

impl Corpus {
    /// Build a corpus from records already in memory
    pub fn from_records(verses: Vec<VerseRecord>) -> Self {
        Self {
            verses,
            ..Default::default()
        }
    }

    /// Load every corpus file of `dir` plus the optional metadata file.
    ///
    /// A missing directory is an error. A missing metadata file is not.
    pub fn load(dir: &Path, naming: &FileNaming, metadata_file: &str) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::CorpusNotFound(dir.to_path_buf()));
        }

        let metadata = load_metadata(&dir.join(metadata_file))?;
        if let Some(metadata) = &metadata {
            info!("Dataset contains {} verses", metadata.total_verses);
        }

        let files = discover_corpus_files(dir, naming)?;
        let mut verses = Vec::new();

        for file in &files {
            let content = fs::read_to_string(file)?;
            let parsed = parse_corpus(&content);
            debug!("Parsed {} verses from {}", parsed.len(), file.display());
            verses.extend(parsed);
        }

        info!("Loaded {} verses from {} files", verses.len(), files.len());

        if let Some(metadata) = metadata.as_ref().filter(|m| m.total_verses != verses.len()) {
            warn!(
                "Metadata lists {} verses but {} were loaded",
                metadata.total_verses,
                verses.len()
            );
        }

        Ok(Self {
            verses,
            metadata,
            files,
        })
    }

    /// Load using a runtime configuration
    pub fn from_config(config: &RagConfig) -> Result<Self> {
        Self::load(
            &config.dataset_dir,
            &FileNaming::from(config),
            &config.metadata_file,
        )
    }

    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    /// Corpus files that were read, in load order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

fn load_metadata(path: &Path) -> Result<Option<DatasetMetadata>> {
    if !path.is_file() {
        debug!("No metadata file at {}", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let metadata = serde_json::from_str(&content)
        .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?;
    Ok(Some(metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_file_naming() {
        let naming = FileNaming::default();

        assert!(naming.matches("vedic_corpus_part_1.txt"));
        assert!(naming.matches("vedic_corpus_part_12.txt"));
        assert!(!naming.matches("vedic_corpus_part_1.json"));
        assert!(!naming.matches("notes.txt"));
        assert_eq!(naming.part_name(3), "vedic_corpus_part_3.txt");
    }

    #[test]
    fn test_overlapping_prefix_and_suffix() {
        let naming = FileNaming::new("part", "part");
        assert!(!naming.matches("part"));
        assert!(naming.matches("partpart"));
    }

    #[test]
    fn test_discover_sorts_and_filters() {
        let dir = TempDir::new().unwrap();
        write(&dir, "vedic_corpus_part_2.txt", "");
        write(&dir, "vedic_corpus_part_10.txt", "");
        write(&dir, "vedic_corpus_part_1.txt", "");
        write(&dir, "vedic_corpus_part_extra.txt", "");
        write(&dir, "dataset_metadata.json", "{}");
        write(&dir, "readme.txt", "");
        fs::create_dir(dir.path().join("vedic_corpus_part_9.txt")).unwrap();

        let files = discover_corpus_files(dir.path(), &FileNaming::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            vec![
                "vedic_corpus_part_1.txt",
                "vedic_corpus_part_2.txt",
                "vedic_corpus_part_10.txt",
                "vedic_corpus_part_extra.txt",
            ]
        );
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nowhere");

        let result = Corpus::load(&missing, &FileNaming::default(), "dataset_metadata.json");
        assert!(matches!(result, Err(Error::CorpusNotFound(path)) if path == missing));
    }

    #[test]
    fn test_load_in_file_then_block_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "vedic_corpus_part_2.txt", "Title: C\n---\n");
        write(&dir, "vedic_corpus_part_1.txt", "Title: A\n---\nTitle: B\n---\n");

        let corpus = Corpus::load(dir.path(), &FileNaming::default(), "dataset_metadata.json").unwrap();
        let titles: Vec<_> = corpus.verses().iter().filter_map(|v| v.title.as_deref()).collect();

        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(corpus.files().len(), 2);
        assert!(corpus.metadata().is_none());
    }

    #[test]
    fn test_load_reads_metadata() {
        let dir = TempDir::new().unwrap();
        write(&dir, "dataset_metadata.json", r#"{"total_verses": 42}"#);

        let corpus = Corpus::load(dir.path(), &FileNaming::default(), "dataset_metadata.json").unwrap();

        assert!(corpus.is_empty());
        assert_eq!(corpus.metadata().map(|m| m.total_verses), Some(42));
    }

    #[test]
    fn test_metadata_count_mismatch_still_loads() {
        let dir = TempDir::new().unwrap();
        write(&dir, "dataset_metadata.json", r#"{"total_verses": 5}"#);
        write(&dir, "vedic_corpus_part_1.txt", "Title: A\n---\nTitle: B\n---\n");

        let corpus = Corpus::load(dir.path(), &FileNaming::default(), "dataset_metadata.json").unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.metadata().map(|m| m.total_verses), Some(5));
    }

    #[test]
    fn test_invalid_metadata_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "dataset_metadata.json", "not json");

        let result = Corpus::load(dir.path(), &FileNaming::default(), "dataset_metadata.json");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_undecodable_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vedic_corpus_part_1.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let result = Corpus::load(dir.path(), &FileNaming::default(), "dataset_metadata.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
