// ============================================================
// Layer 5 — Config Store
// ============================================================
// Saves and loads IngestionConfig as pretty-printed JSON so a
// run can be reproduced from a file instead of a long list of
// command line flags.
//
// Example file:
//   {
//     "source_data_path": "notebook/data/data.csv",
//     "train_data_path": "artifacts/train.csv",
//     "test_data_path": "artifacts/test.csv",
//     "raw_data_path": "artifacts/raw.csv",
//     "test_size": 0.2,
//     "random_state": 24,
//     "stratify_col": "target",
//     "delimiter": ","
//   }
//
// Fields left out of the file take their default values.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::ingest_use_case::IngestionConfig;

/// Read an IngestionConfig from a JSON file.
pub fn load_config(path: &Path) -> Result<IngestionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config '{}'", path.display()))?;

    let cfg: IngestionConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::debug!("Loaded ingestion config from '{}'", path.display());
    Ok(cfg)
}

/// Write an IngestionConfig as pretty JSON, creating parent directories.
pub fn save_config(cfg: &IngestionConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config '{}'", path.display()))?;

    tracing::info!("Saved ingestion config to '{}'", path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_matches() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ingest.json");

        let cfg = IngestionConfig {
            test_size:    0.3,
            stratify_col: None,
            ..IngestionConfig::default()
        };

        save_config(&cfg, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingest.json");
        fs::write(&path, r#"{ "random_state": 7, "delimiter": ";" }"#).unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.random_state, 7);
        assert_eq!(cfg.delimiter, b';');
        assert_eq!(cfg.test_size, 0.2);
        assert_eq!(cfg.stratify_col.as_deref(), Some("target"));
    }

    #[test]
    fn test_bad_json_reports_path() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
