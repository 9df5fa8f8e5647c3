//! Tabular data ingestion: load a delimited dataset, keep a raw snapshot,
//! and split it into train/test files (optionally stratified).
//!
//! ```no_run
//! use data_ingest::application::ingest_use_case::{DataIngestion, IngestionConfig};
//!
//! let artifacts = DataIngestion::new(IngestionConfig::default()).initiate()?;
//! println!("{} / {}", artifacts.train_path.display(), artifacts.test_path.display());
//! # Ok::<(), data_ingest::domain::error::IngestionError>(())
//! ```

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

pub use application::ingest_use_case::{DataIngestion, IngestionArtifacts, IngestionConfig};
pub use domain::error::{IngestStage, IngestionError};
