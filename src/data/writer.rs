// ============================================================
// Layer 4 — CSV Writer
// ============================================================
// Persists a Table as delimited text: header row first, then
// every data row as-is. No row index column is added.
//
// The target file is truncated and rewritten in place. A crash
// part-way through leaves a partial file behind; nothing here
// writes to a temporary file and renames it.
//
// Output is UTF-8 (cells are Rust Strings).

use std::fs::File;
use std::path::Path;

use crate::domain::error::IngestFailure;
use crate::domain::table::Table;
use crate::domain::traits::TableSink;

/// Writes tables as delimited text files.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSink for CsvWriter {
    fn save(&self, table: &Table, path: &Path) -> Result<(), IngestFailure> {
        let file = File::create(path).map_err(|e| IngestFailure::io(path, e))?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(file);

        writer
            .write_record(&table.headers)
            .map_err(|e| IngestFailure::csv(path, e))?;

        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| IngestFailure::csv(path, e))?;
        }

        writer.flush().map_err(|e| IngestFailure::io(path, e))?;

        tracing::debug!("Wrote {} rows to '{}'", table.len(), path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::CsvLoader;
    use crate::domain::traits::TableSource;
    use std::fs;

    fn sample() -> Table {
        Table::new(
            vec!["text".into(), "target".into()],
            vec![
                vec!["plain".into(), "1".into()],
                vec!["needs, quoting".into(), "0".into()],
            ],
        )
    }

    #[test]
    fn test_writes_header_and_no_index() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        CsvWriter::new().save(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("text,target"));
        assert_eq!(lines.next(), Some("plain,1"));
        assert_eq!(lines.next(), Some("\"needs, quoting\",0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_writes_with_configured_delimiter() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        CsvWriter::new().with_delimiter(b'\t').save(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("text\ttarget"));
        assert_eq!(lines.next(), Some("plain\t1"));
        // The comma no longer needs quoting
        assert_eq!(lines.next(), Some("needs, quoting\t0"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents that are much longer than the new file\n".repeat(10)).unwrap();

        CsvWriter::new().save(&sample(), &path).unwrap();
        let reloaded = CsvLoader::new(&path).load().unwrap();
        assert_eq!(reloaded, sample());
    }

    #[test]
    fn test_missing_parent_dir_is_io_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        let err  = CsvWriter::new().save(&sample(), &path).unwrap_err();
        assert!(matches!(err, IngestFailure::Io { .. }));
    }
}
