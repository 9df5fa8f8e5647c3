// ============================================================
// Layer 3 — Table Domain Type
// ============================================================
// An in-memory dataset: a header row of column names plus
// the data rows, every cell kept as the exact text read from
// the source file. Nothing is parsed, trimmed or typed here.
//
// A Table lives only for the duration of one ingestion call.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

/// Rows × named columns, all cells as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names in file order
    pub headers: Vec<String>,

    /// Data rows; every row has exactly `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (the header is not counted)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` among the headers, if present.
    /// Matching is exact and case-sensitive.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All values of one column, top to bottom. None if the column is
    /// absent or some row is too short to have it.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str))
            .collect()
    }

    /// First row whose width differs from the header, as
    /// (row index, cell count).
    pub fn ragged_row(&self) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.headers.len())
            .map(|(i, row)| (i, row.len()))
    }

    /// Build a new table holding the rows at `indices`, in that order.
    ///
    /// # Panics
    /// If any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Table {
        Table {
            headers: self.headers.clone(),
            rows:    indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

/// The two halves of a split. Together their rows are exactly the
/// rows of the source table, each appearing once.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub train: Table,
    pub test:  Table,

    /// Name of the column the split was stratified on, if any
    pub stratified_on: Option<String>,
}

impl TrainTestSplit {
    /// Fraction of rows that ended up in the test half
    pub fn test_ratio(&self) -> f64 {
        let total = self.train.len() + self.test.len();
        if total == 0 {
            return 0.0;
        }
        self.test.len() as f64 / total as f64
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["text".into(), "target".into()],
            vec![
                vec!["a".into(), "0".into()],
                vec!["b".into(), "1".into()],
                vec!["c".into(), "0".into()],
            ],
        )
    }

    #[test]
    fn test_column_lookup_is_exact() {
        let t = sample();
        assert_eq!(t.column_index("target"), Some(1));
        assert!(t.has_column("text"));
        // Case matters
        assert!(!t.has_column("Target"));
    }

    #[test]
    fn test_column_values() {
        let t = sample();
        assert_eq!(t.column("target").unwrap(), vec!["0", "1", "0"]);
        assert!(t.column("missing").is_none());
    }

    #[test]
    fn test_ragged_rows_are_found_not_indexed() {
        let mut t = sample();
        assert_eq!(t.ragged_row(), None);

        t.rows.push(vec!["short".into()]);
        assert_eq!(t.ragged_row(), Some((3, 1)));
        // Second column is missing on the short row
        assert!(t.column("target").is_none());
        assert_eq!(t.column("text").unwrap().len(), 4);
    }

    #[test]
    fn test_select_keeps_order_and_headers() {
        let t   = sample();
        let sub = t.select(&[2, 0]);
        assert_eq!(sub.headers, t.headers);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.rows[0][0], "c");
        assert_eq!(sub.rows[1][0], "a");
    }

    #[test]
    fn test_ratio_of_empty_split() {
        let empty = Table::new(vec!["x".into()], Vec::new());
        let split = TrainTestSplit {
            train:         empty.clone(),
            test:          empty,
            stratified_on: None,
        };
        assert_eq!(split.test_ratio(), 0.0);
    }
}
