// ============================================================
// Layer 2 — Data Ingestion Use Case
// ============================================================
// Runs one ingestion end to end:
//
//   Step 0: Validate the configuration          (Configure)
//   Step 1: Load the source dataset             (Load)
//   Step 2: Create output directories           (PrepareOutput)
//   Step 3: Save the raw snapshot               (SaveRaw)
//   Step 4: Split into train / test             (Split)
//   Step 5: Save the train and test files       (SaveTrain, SaveTest)
//   Step 6: Return both paths to the caller
//
// Any failure stops the run and comes back as an
// IngestionError tagged with the step it happened in. Files
// written by earlier steps are left in place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::{loader::CsvLoader, splitter::split_train_test, writer::CsvWriter};
use crate::domain::error::{AtStage, IngestFailure, IngestStage, IngestionError};
use crate::domain::traits::{TableSink, TableSource};

// ─── Ingestion Configuration ─────────────────────────────────────────────────
// Where to read from, where to write to, and how to split.
// Built once by the caller (Default, CLI flags or a JSON file)
// and never changed during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    pub source_data_path: PathBuf,
    pub train_data_path:  PathBuf,
    pub test_data_path:   PathBuf,
    pub raw_data_path:    PathBuf,

    /// Fraction of rows that go to the test file, in (0, 1)
    pub test_size: f64,

    /// Seed for the shuffle; same seed and input give the same split
    pub random_state: u64,

    /// Stratify on this column when the dataset has it
    pub stratify_col: Option<String>,

    /// Field delimiter for reading and writing
    #[serde(with = "delimiter_char")]
    pub delimiter: u8,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        let artifacts = Path::new("artifacts");
        Self {
            source_data_path: Path::new("notebook").join("data").join("data.csv"),
            train_data_path:  artifacts.join("train.csv"),
            test_data_path:   artifacts.join("test.csv"),
            raw_data_path:    artifacts.join("raw.csv"),
            test_size:        0.2,
            random_state:     24,
            stratify_col:     Some("target".to_string()),
            delimiter:        b',',
        }
    }
}

impl IngestionConfig {
    /// Check values that would otherwise only fail half-way through a run.
    pub fn validate(&self) -> Result<(), IngestFailure> {
        // Written so NaN fails too
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(IngestFailure::InvalidConfig(format!(
                "test_size must be strictly between 0 and 1, got {}",
                self.test_size
            )));
        }
        if matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(IngestFailure::InvalidConfig(format!(
                "delimiter {:?} is not usable",
                char::from(self.delimiter)
            )));
        }
        Ok(())
    }
}

/// Serialise the delimiter byte as a one-character string (`","`).
mod delimiter_char {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delimiter: &u8, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&char::from(*delimiter).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
        let text = String::deserialize(d)?;
        match text.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(D::Error::custom(format!(
                "delimiter must be a single ASCII character, got {text:?}"
            ))),
        }
    }
}

// ─── Ingestion Result ────────────────────────────────────────────────────────
/// Locations of the files a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionArtifacts {
    pub train_path: PathBuf,
    pub test_path:  PathBuf,
    pub raw_path:   PathBuf,
}

impl IngestionArtifacts {
    /// The (train, test) pair handed to downstream steps
    pub fn into_pair(self) -> (PathBuf, PathBuf) {
        (self.train_path, self.test_path)
    }
}

// ─── DataIngestion ───────────────────────────────────────────────────────────
/// Owns the config and runs the ingestion steps.
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    /// Execute the full ingestion with CSV input and output.
    pub fn initiate(&self) -> Result<IngestionArtifacts, IngestionError> {
        let cfg    = &self.config;
        let source = CsvLoader::new(&cfg.source_data_path).with_delimiter(cfg.delimiter);
        let sink   = CsvWriter::new().with_delimiter(cfg.delimiter);
        self.initiate_with(&source, &sink)
    }

    /// Execute the ingestion against any table source and sink.
    pub fn initiate_with(
        &self,
        source: &dyn TableSource,
        sink:   &dyn TableSink,
    ) -> Result<IngestionArtifacts, IngestionError> {
        let cfg = &self.config;
        tracing::info!("Entered the data ingestion component");

        // ── Step 0: Validate ─────────────────────────────────────────────────
        cfg.validate().at_stage(IngestStage::Configure)?;

        // ── Step 1: Load ─────────────────────────────────────────────────────
        tracing::info!("Reading dataset from '{}'", cfg.source_data_path.display());
        let table = source.load().at_stage(IngestStage::Load)?;
        if let Some((row, found)) = table.ragged_row() {
            let expected = table.headers.len();
            return Err(IngestionError::new(
                IngestStage::Load,
                IngestFailure::RaggedRow { row, found, expected },
            ));
        }
        tracing::info!(
            "Read dataset with shape ({}, {})",
            table.len(),
            table.headers.len()
        );

        // ── Step 2: Output directories ───────────────────────────────────────
        for path in [&cfg.raw_data_path, &cfg.train_data_path, &cfg.test_data_path] {
            ensure_parent_dir(path).at_stage(IngestStage::PrepareOutput)?;
        }

        // ── Step 3: Raw snapshot ─────────────────────────────────────────────
        sink.save(&table, &cfg.raw_data_path)
            .at_stage(IngestStage::SaveRaw)?;
        tracing::info!("Saved raw snapshot to '{}'", cfg.raw_data_path.display());

        // ── Step 4: Split ────────────────────────────────────────────────────
        tracing::info!("Train-test split initiated");
        let split = split_train_test(
            &table,
            cfg.test_size,
            cfg.random_state,
            cfg.stratify_col.as_deref(),
        )
        .at_stage(IngestStage::Split)?;

        match &split.stratified_on {
            Some(column) => tracing::info!("Stratified split on column '{}'", column),
            None         => tracing::info!("Plain random split (no stratify column found)"),
        }
        tracing::info!(
            "Split: {} train, {} test ({:.3} test ratio)",
            split.train.len(),
            split.test.len(),
            split.test_ratio()
        );

        // ── Step 5: Partitions ───────────────────────────────────────────────
        sink.save(&split.train, &cfg.train_data_path)
            .at_stage(IngestStage::SaveTrain)?;
        sink.save(&split.test, &cfg.test_data_path)
            .at_stage(IngestStage::SaveTest)?;

        tracing::info!("Ingestion of the data is completed");

        // ── Step 6: Hand back the locations ──────────────────────────────────
        Ok(IngestionArtifacts {
            train_path: cfg.train_data_path.clone(),
            test_path:  cfg.test_data_path.clone(),
            raw_path:   cfg.raw_data_path.clone(),
        })
    }
}

/// `mkdir -p` for the directory holding `path`; no-op for bare file names.
fn ensure_parent_dir(path: &Path) -> Result<(), IngestFailure> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| IngestFailure::io(dir, e))
        }
        _ => Ok(()),
    }
}
