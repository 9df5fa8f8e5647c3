// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// ingestion works with. No file formats and no randomness here.

// The in-memory dataset and the train/test pair
pub mod table;

// IngestionError, IngestStage and SplitError
pub mod error;

// TableSource / TableSink abstractions implemented in Layer 4
pub mod traits;
