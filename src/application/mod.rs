// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: the use case calls into the data
// layer (Layer 4) for reading, splitting and writing, and owns
// the configuration for one run.

// The ingestion workflow: load → snapshot → split → save
pub mod ingest_use_case;
