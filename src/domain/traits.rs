// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The ingestion use case reads and writes tables through these
// two traits, so the CSV details stay in the data layer.
//
// Implementations:
//   - CsvLoader → TableSource (Latin-1 delimited text)
//   - CsvWriter → TableSink   (delimited text, header, no index)

use std::path::Path;

use crate::domain::error::IngestFailure;
use crate::domain::table::Table;

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Anything that can produce a whole table in one call.
pub trait TableSource {
    fn load(&self) -> Result<Table, IngestFailure>;
}

// ─── TableSink ────────────────────────────────────────────────────────────────
/// Anything that can persist a table at a path, replacing
/// whatever was there before.
pub trait TableSink {
    fn save(&self, table: &Table, path: &Path) -> Result<(), IngestFailure>;
}
