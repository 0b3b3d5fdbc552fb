//! Untyped tabular data.
//!
//! A `RawTable` is exactly what a report reader produced: original headers
//! and string cells, no interpretation. Typing happens downstream once a
//! schema has been resolved against the headers.

use crate::resolve;

/// A table of string cells under arbitrary source headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell accessor tolerant of ragged rows: out-of-range cells read as "".
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Resolve a column index against this table's headers.
    pub fn column(&self, aliases: &[&str]) -> Option<usize> {
        resolve::resolve_index(&self.headers, aliases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawTable {
        RawTable::new(
            vec!["Product".into(), "Available".into()],
            vec![
                vec!["Blue Dream 3.5g".into(), "12".into()],
                vec!["OG Kush 1g".into()],
            ],
        )
    }

    #[test]
    fn cell_access_is_ragged_safe() {
        let t = sample();
        assert_eq!(t.cell(0, 1), "12");
        assert_eq!(t.cell(1, 1), "");
        assert_eq!(t.cell(9, 0), "");
    }

    #[test]
    fn column_resolution_uses_aliases() {
        let t = sample();
        assert_eq!(t.column(&["on hand units", "available"]), Some(1));
        assert_eq!(t.column(&["unit cost"]), None);
    }

    #[test]
    fn len_counts_rows() {
        assert_eq!(sample().len(), 2);
        assert!(!sample().is_empty());
        assert!(RawTable::default().is_empty());
    }
}
