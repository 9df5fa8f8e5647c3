// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches dataset bytes or row order.
//
//   source .csv (Latin-1)
//       │
//       ▼
//   CsvLoader         → Table (header + rows, text cells)
//       │
//       ├──► CsvWriter → raw snapshot
//       │
//       ▼
//   split_train_test  → TrainTestSplit (plain or stratified)
//       │
//       ▼
//   CsvWriter         → train .csv, test .csv
//
// Reference: csv crate documentation
//            rand crate documentation

/// Reads delimited Latin-1 text into a Table
pub mod loader;

/// Writes a Table as delimited text with a header row
pub mod writer;

/// Seeded train/test split, optionally stratified
pub mod splitter;
