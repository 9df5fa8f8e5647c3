// ============================================================
// Layer 3 — Ingestion Errors
// ============================================================
// Every failure inside an ingestion run surfaces to the caller
// as one type, IngestionError. It records:
//   - the stage the run was in when it failed (point of origin)
//   - the underlying cause, kept as the error `source`
//
// The split step has its own error enum, SplitError, so the
// splitter can be used and tested without any I/O types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The step of an ingestion run. A failure is tagged with the
/// stage that was executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngestStage {
    /// Validating the configuration before any I/O
    Configure,
    /// Reading the source dataset
    Load,
    /// Creating output directories
    PrepareOutput,
    /// Writing the raw snapshot
    SaveRaw,
    /// Partitioning rows into train/test
    Split,
    /// Writing the train partition
    SaveTrain,
    /// Writing the test partition
    SaveTest,
}

impl fmt::Display for IngestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IngestStage::Configure     => "configure",
            IngestStage::Load          => "load",
            IngestStage::PrepareOutput => "prepare-output",
            IngestStage::SaveRaw       => "save-raw",
            IngestStage::Split         => "split",
            IngestStage::SaveTrain     => "save-train",
            IngestStage::SaveTest      => "save-test",
        };
        f.write_str(name)
    }
}

/// Errors from the train/test partitioning step.
#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("cannot split an empty dataset")]
    EmptyDataset,

    #[error("test fraction {test_fraction} of {rows} rows leaves the {side} set empty")]
    EmptyPartition {
        rows:          usize,
        test_fraction: f64,
        side:          &'static str,
    },

    #[error("class '{class}' in column '{column}' has only {count} member(s); stratified split needs at least 2")]
    ClassTooSmall {
        column: String,
        class:  String,
        count:  usize,
    },

    #[error("{side} set of {size} rows is smaller than the {classes} classes in column '{column}'")]
    TooFewRowsForClasses {
        column:  String,
        side:    &'static str,
        size:    usize,
        classes: usize,
    },
}

/// The underlying cause of an ingestion failure.
#[derive(Debug, Error)]
pub enum IngestFailure {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on '{path}': {source}")]
    Csv {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no columns to parse in '{path}'")]
    NoColumns { path: PathBuf },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row:      usize,
        found:    usize,
        expected: usize,
    },

    #[error(transparent)]
    Split(#[from] SplitError),
}

impl IngestFailure {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IngestFailure::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        IngestFailure::Csv { path: path.into(), source }
    }
}

/// The single error type returned by an ingestion run.
#[derive(Debug, Error)]
#[error("data ingestion failed during {stage}: {source}")]
pub struct IngestionError {
    pub stage:  IngestStage,
    #[source]
    pub source: IngestFailure,
}

impl IngestionError {
    pub fn new(stage: IngestStage, source: impl Into<IngestFailure>) -> Self {
        Self { stage, source: source.into() }
    }
}

/// Extension trait for tagging a fallible step with its stage.
///
/// ```ignore
/// loader.load().at_stage(IngestStage::Load)?;
/// ```
pub trait AtStage<T> {
    fn at_stage(self, stage: IngestStage) -> Result<T, IngestionError>;
}

impl<T, E: Into<IngestFailure>> AtStage<T> for Result<T, E> {
    fn at_stage(self, stage: IngestStage) -> Result<T, IngestionError> {
        self.map_err(|e| IngestionError::new(stage, e))
    }
}
