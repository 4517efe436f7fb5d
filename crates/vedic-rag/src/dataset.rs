//! Dataset writer and built-in seed verses

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use vedic_core::{DatasetMetadata, Error, RagConfig, Result, VerseRecord};

use crate::format::render_block;
use crate::loader::FileNaming;

/// Records per corpus part unless configured otherwise
pub const DEFAULT_MAX_ENTRIES_PER_FILE: usize = 20_000;

/// Writes verse records as a corpus directory plus metadata file
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    output_dir: PathBuf,
    naming: FileNaming,
    metadata_file: String,
    max_entries_per_file: usize,
}

impl DatasetWriter {
    /// Create a writer using the default naming convention
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let config = RagConfig::default();
        Self {
            output_dir: output_dir.into(),
            naming: FileNaming::default(),
            metadata_file: config.metadata_file,
            max_entries_per_file: DEFAULT_MAX_ENTRIES_PER_FILE,
        }
    }

    /// Create a writer matching a runtime configuration
    pub fn from_config(config: &RagConfig) -> Self {
        Self {
            output_dir: config.dataset_dir.clone(),
            naming: FileNaming::from(config),
            metadata_file: config.metadata_file.clone(),
            max_entries_per_file: DEFAULT_MAX_ENTRIES_PER_FILE,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_max_entries_per_file(mut self, max_entries_per_file: usize) -> Self {
        self.max_entries_per_file = max_entries_per_file;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write all records and the metadata file, returning the metadata.
    ///
    /// Parts are numbered from 1 and hold at most `max_entries_per_file`
    /// records each.
    pub fn write(&self, records: &[VerseRecord]) -> Result<DatasetMetadata> {
        if self.max_entries_per_file == 0 {
            return Err(Error::Configuration(
                "max entries per file must be at least 1".to_string(),
            ));
        }
        if records.is_empty() {
            return Err(Error::InvalidInput("no verses to write".to_string()));
        }

        fs::create_dir_all(&self.output_dir)?;
        info!(
            "Creating dataset files from {} total verses in {}",
            records.len(),
            self.output_dir.display()
        );

        let mut files_created = Vec::new();

        for (i, chunk) in records.chunks(self.max_entries_per_file).enumerate() {
            let name = self.naming.part_name(i + 1);
            let content: String = chunk.iter().map(render_block).collect();
            fs::write(self.output_dir.join(&name), content)?;
            debug!("Wrote {} verses to {}", chunk.len(), name);
            files_created.push(name);
        }

        let metadata = DatasetMetadata::from_records(records, files_created).stamped();
        let json = serde_json::to_string_pretty(&metadata)?;
        fs::write(self.output_dir.join(&self.metadata_file), json)?;

        info!("Created {} text files", metadata.files_created.len());
        Ok(metadata)
    }
}

/// Well-known verses used to seed a dataset without any download
pub fn sample_verses() -> Vec<VerseRecord> {
    const SAMPLES: [[&str; 6]; 6] = [
        [
            "Bhagavad Gita",
            "Bhagavad Gita",
            "Chapter 2, Verse 47",
            "2.47",
            "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन। मा कर्मफलहेतुर्भूर्मा ते सङ्गोऽस्त्वकर्मणि॥",
            "You have a right to perform your prescribed duties, but you are not entitled to the fruits of your actions. Never consider yourself the cause of the results of your activities, and never be attached to not doing your duty.",
        ],
        [
            "Bhagavad Gita",
            "Bhagavad Gita",
            "Chapter 2, Verse 20",
            "2.20",
            "न जायते म्रियते वा कदाचिन्। नायं भूत्वा भविता वा न भूयः। अजो नित्यः शाश्वतोऽयं पुराणो। न हन्यते हन्यमाने शरीरे॥",
            "For the soul there is never birth nor death. It has not come into being, nor will it cease to be. It is unborn, eternal, ever-existing and primeval. It is not slain when the body is slain.",
        ],
        [
            "Upanishads",
            "Upanishad",
            "Isha Upanishad, Verse 1",
            "Isha 1",
            "पूर्णमदः पूर्णमिदं पूर्णात् पूर्णमुदच्यते। पूर्णस्य पूर्णमादाय पूर्णमेवावशिष्यते॥",
            "That is whole, this is whole; the whole has come out of the whole. When the whole is taken from the whole, the whole remains.",
        ],
        [
            "Upanishads",
            "Upanishad",
            "Katha Upanishad, Verse 2.1.1",
            "Katha 2.1.1",
            "उत्तिष्ठत जाग्रत प्राप्य वरान् निबोधत। क्षुरस्य धारा निशिता दुरत्यया दुर्गं पथस्तत् कवयो वदन्ति॥",
            "Arise! Awake! Having approached the eminent teachers, understand them. The path is as sharp as the edge of a razor, and thus difficult to traverse, say the wise.",
        ],
        [
            "Vedas",
            "Veda",
            "Rig Veda, Mandala 1, Sukta 1",
            "RV 1.1.1",
            "अग्निमीळे पुरोहितं यज्ञस्य देवं रत्वीजम्। होतारं रत्नधातमम्॥",
            "I praise Agni, the chosen priest, god of the sacrifice, the minister of the rite, the bestower of treasures.",
        ],
        [
            "Vedas",
            "Veda",
            "Yajur Veda, Taittiriya Samhita",
            "YV TS 1.1.1",
            "शं नो मित्रः शं वरुणः शं भवत्यर्यमा। शं इन्द्रो बृहस्पतिः शं विष्णुरुक्रमः॥",
            "May Mitra be kind to us, and Varuna, Aryaman, Indra, Brihaspati, and the wide-striding Vishnu.",
        ],
    ];

    SAMPLES
        .iter()
        .map(|values| {
            VerseRecord::KNOWN_FIELDS
                .iter()
                .zip(values.iter())
                .fold(VerseRecord::new(), |record, (key, value)| {
                    record.with_field(key, value)
                })
        })
        .collect()
}
