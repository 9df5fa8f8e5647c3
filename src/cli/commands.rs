// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Subcommands:
//   ingest       (default) load, snapshot and split a dataset
//   init-config  write the default configuration as JSON
//
// Every `ingest` flag is optional. Precedence, lowest first:
//   IngestionConfig::default() → --config file → flags

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::ingest_use_case::IngestionConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the source dataset, save a raw copy and write train/test files
    Ingest(IngestArgs),

    /// Write the default ingestion configuration to a JSON file
    InitConfig(InitConfigArgs),
}

/// Arguments for the `ingest` command.
#[derive(Args, Debug, Default)]
pub struct IngestArgs {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source dataset (delimited text, Latin-1, header row)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Where to write the train partition
    #[arg(long)]
    pub train_path: Option<PathBuf>,

    /// Where to write the test partition
    #[arg(long)]
    pub test_path: Option<PathBuf>,

    /// Where to write the unmodified raw snapshot
    #[arg(long)]
    pub raw_path: Option<PathBuf>,

    /// Fraction of rows in the test partition, strictly between 0 and 1
    #[arg(long)]
    pub test_size: Option<f64>,

    /// Seed for the shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stratify on this column when the dataset has it
    #[arg(long, conflicts_with = "no_stratify")]
    pub stratify_col: Option<String>,

    /// Never stratify, even if the configured column exists
    #[arg(long)]
    pub no_stratify: bool,

    /// Field delimiter (single ASCII character)
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl IngestArgs {
    /// Apply the flags that were given on top of `base`.
    pub fn apply_to(self, base: IngestionConfig) -> anyhow::Result<IngestionConfig> {
        let mut cfg = base;

        if let Some(p) = self.source     { cfg.source_data_path = p; }
        if let Some(p) = self.train_path { cfg.train_data_path  = p; }
        if let Some(p) = self.test_path  { cfg.test_data_path   = p; }
        if let Some(p) = self.raw_path   { cfg.raw_data_path    = p; }
        if let Some(f) = self.test_size  { cfg.test_size        = f; }
        if let Some(s) = self.seed       { cfg.random_state     = s; }

        if self.no_stratify {
            cfg.stratify_col = None;
        } else if let Some(col) = self.stratify_col {
            cfg.stratify_col = Some(col);
        }

        if let Some(d) = self.delimiter {
            anyhow::ensure!(d.is_ascii(), "delimiter must be a single ASCII character, got {d:?}");
            cfg.delimiter = d as u8;
        }

        Ok(cfg)
    }
}

/// Arguments for the `init-config` command
#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Destination JSON file
    #[arg(long, default_value = "ingest_config.json")]
    pub output: PathBuf,
}
