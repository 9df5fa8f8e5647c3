// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting helpers that are not part of an ingestion run
// itself.
//
//   config_store.rs — IngestionConfig as a JSON file
//                     (read with `--config`, written by
//                     `init-config`)

/// JSON load/save for IngestionConfig
pub mod config_store;
