use serde::{Deserialize, Serialize};

/// In-memory table: one header row plus data rows, all cells as text.
///
/// Rows are expected to have `headers.len()` cells but this is not enforced;
/// ragged rows are kept as parsed and reported through [`Grid::issues`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create a grid from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Whether the grid has a header row.
    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Data row at `index`.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell value at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Rows whose cell count differs from the header count.
    pub fn issues(&self) -> Vec<GridIssue> {
        let expected = self.column_count();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, cells)| cells.len() != expected)
            .map(|(row, cells)| GridIssue::ColumnMismatch {
                row,
                expected,
                found: cells.len(),
            })
            .collect()
    }
}

/// A structural problem found in a parsed grid.
///
/// Issues are warnings: the grid is still usable and exported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridIssue {
    /// Data row `row` has `found` cells where the header has `expected`.
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for GridIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColumnMismatch {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_cell_lookup() {
        let grid = Grid::new(
            strings(&["name", "age"]),
            vec![strings(&["Alice", "30"]), strings(&["Bob", "25"])],
        );
        assert_eq!(grid.cell(1, 0), Some("Bob"));
        assert_eq!(grid.cell(1, 2), None);
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.row(0).unwrap().len(), 2);
    }

    #[test]
    fn test_issues_report_ragged_rows() {
        let grid = Grid::new(
            strings(&["a", "b"]),
            vec![strings(&["1", "2"]), strings(&["1", "2", "3"]), strings(&["x"])],
        );
        let issues = grid.issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0],
            GridIssue::ColumnMismatch {
                row: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(issues[1].to_string(), "row 2 has 1 cells, expected 2");
    }

    #[test]
    fn test_default_grid_has_no_headers() {
        let grid = Grid::default();
        assert!(!grid.has_headers());
        assert_eq!(grid.row_count(), 0);
        assert!(grid.issues().is_empty());
    }
}
