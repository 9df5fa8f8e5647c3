// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands off to the
// application layer. Running the binary with no subcommand is
// the same as `ingest` with every value at its default.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, IngestArgs, InitConfigArgs};

use crate::application::ingest_use_case::{DataIngestion, IngestionConfig};
use crate::infra::config_store;

#[derive(Parser, Debug)]
#[command(
    name = "data-ingest",
    version,
    about = "Load a delimited dataset, keep a raw snapshot and split it into train/test files."
)]
pub struct Cli {
    /// Subcommand to run; defaults to `ingest`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            None                          => run_ingest(IngestArgs::default()),
            Some(Commands::Ingest(args))  => run_ingest(args),
            Some(Commands::InitConfig(a)) => run_init_config(a),
        }
    }
}

/// Build the config (defaults → file → flags) and run one ingestion.
fn run_ingest(args: IngestArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => config_store::load_config(path)?,
        None       => IngestionConfig::default(),
    };
    let cfg = args.apply_to(base)?;

    let artifacts = DataIngestion::new(cfg)
        .initiate()
        .context("ingestion run failed")?;

    println!("train={}", artifacts.train_path.display());
    println!("test={}",  artifacts.test_path.display());
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    config_store::save_config(&IngestionConfig::default(), &args.output)?;
    println!("Wrote default config to {}", args.output.display());
    Ok(())
}
