// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Reads a delimited text file into a Table using the `csv`
// crate. The first record is the header row.
//
// Encoding: the source is ISO-8859-1 (Latin-1). Every byte
// maps to the Unicode code point with the same value, so the
// loader reads raw byte records and widens each byte to a char.
// This never fails, whatever bytes the file contains.
//
// Records must all have the same number of fields as the
// header; a ragged row is reported as a CSV error with its
// position.
//
// Reference: csv crate documentation (ByteRecord, ReaderBuilder)

use std::fs::File;
use std::path::PathBuf;

use csv::ByteRecord;

use crate::domain::error::IngestFailure;
use crate::domain::table::Table;
use crate::domain::traits::TableSource;

/// Loads one delimited Latin-1 file as a Table.
pub struct CsvLoader {
    path:      PathBuf,
    delimiter: u8,
}

impl CsvLoader {
    /// Loader for a comma-separated file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl TableSource for CsvLoader {
    fn load(&self) -> Result<Table, IngestFailure> {
        let file = File::open(&self.path)
            .map_err(|e| IngestFailure::io(&self.path, e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(file);

        let headers = decode_latin1(
            reader
                .byte_headers()
                .map_err(|e| IngestFailure::csv(&self.path, e))?,
        );

        // A header row with a single empty field is what the csv crate
        // reports for a zero-byte file
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(IngestFailure::NoColumns { path: self.path.clone() });
        }

        let mut rows = Vec::new();
        for record in reader.byte_records() {
            let record = record.map_err(|e| IngestFailure::csv(&self.path, e))?;
            rows.push(decode_latin1(&record));
        }

        tracing::debug!(
            "Parsed '{}': {} columns, {} rows",
            self.path.display(),
            headers.len(),
            rows.len()
        );

        Ok(Table::new(headers, rows))
    }
}

/// Widen each Latin-1 byte to its char.
fn decode_latin1(record: &ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| field.iter().map(|&b| char::from(b)).collect())
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_loads_header_and_rows() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "text,target\nhello,1\n\"a, b\",0\n").unwrap();

        let table = CsvLoader::new(&path).load().unwrap();
        assert_eq!(table.headers, vec!["text", "target"]);
        assert_eq!(table.len(), 2);
        // Quoted field keeps its embedded delimiter
        assert_eq!(table.rows[1][0], "a, b");
    }

    #[test]
    fn test_decodes_latin1_bytes() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        // 0xE9 is 'é' in ISO-8859-1 and invalid on its own in UTF-8
        fs::write(&path, b"name\ncaf\xe9\n").unwrap();

        let table = CsvLoader::new(&path).load().unwrap();
        assert_eq!(table.rows[0][0], "café");
    }

    #[test]
    fn test_custom_delimiter() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        fs::write(&path, "a\tb\n1\t2\n").unwrap();

        let table = CsvLoader::new(&path).with_delimiter(b'\t').load().unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvLoader::new(dir.path().join("nope.csv")).load().unwrap_err();
        assert!(matches!(err, IngestFailure::Io { .. }));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "a,b\n1,2\n3\n").unwrap();

        let err = CsvLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, IngestFailure::Csv { .. }));
    }

    #[test]
    fn test_empty_file_has_no_columns() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let err = CsvLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, IngestFailure::NoColumns { .. }));
    }
}
