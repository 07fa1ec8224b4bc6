//! Grid edit operations.
//!
//! Each operation takes the current grid by reference and returns the
//! edited grid, leaving the input untouched. Out-of-range indices are
//! errors rather than silent no-ops.

use crate::error::{CsvEditError, Result};
use crate::types::Grid;

/// Replace the value of one cell.
pub fn edit_cell(grid: &Grid, row: usize, col: usize, value: &str) -> Result<Grid> {
    let cells = grid.rows.get(row).ok_or(CsvEditError::RowOutOfRange {
        index: row,
        len: grid.row_count(),
    })?;
    if col >= cells.len() {
        return Err(CsvEditError::ColumnOutOfRange {
            row,
            index: col,
            len: cells.len(),
        });
    }

    let mut next = grid.clone();
    if let Some(cell) = next.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
        value.clone_into(cell);
    }
    Ok(next)
}

/// Append a row of empty cells, one per header.
pub fn add_row(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    next.rows.push(vec![String::new(); grid.column_count()]);
    next
}

/// Remove the row at `index`, keeping the order of the others.
pub fn delete_row(grid: &Grid, index: usize) -> Result<Grid> {
    if index >= grid.row_count() {
        return Err(CsvEditError::RowOutOfRange {
            index,
            len: grid.row_count(),
        });
    }

    let mut next = grid.clone();
    next.rows.remove(index);
    Ok(next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::csv::parse_csv;

    fn people() -> Grid {
        parse_csv("name,age\nAlice,30\nBob,25\nCarol,41")
    }

    #[test]
    fn test_edit_cell_replaces_one_value() {
        let grid = people();
        let edited = edit_cell(&grid, 1, 1, "26").unwrap();
        assert_eq!(edited.cell(1, 1), Some("26"));
        assert_eq!(edited.cell(0, 1), Some("30"));
        assert_eq!(edited.headers, grid.headers);
        // input unchanged
        assert_eq!(grid.cell(1, 1), Some("25"));
    }

    #[test]
    fn test_edit_cell_out_of_range() {
        let grid = people();
        assert!(matches!(
            edit_cell(&grid, 3, 0, "x"),
            Err(CsvEditError::RowOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            edit_cell(&grid, 0, 2, "x"),
            Err(CsvEditError::ColumnOutOfRange {
                row: 0,
                index: 2,
                len: 2
            })
        ));
    }

    #[test]
    fn test_edit_cell_uses_row_length() {
        // Ragged row wider than the header is still editable.
        let grid = parse_csv("a\n1,2");
        let edited = edit_cell(&grid, 0, 1, "x").unwrap();
        assert_eq!(edited.rows[0], vec!["1", "x"]);
    }

    #[test]
    fn test_add_row_matches_header_count() {
        let grid = add_row(&people());
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.rows[3], vec!["", ""]);
    }

    #[test]
    fn test_delete_row_keeps_order() {
        let grid = delete_row(&people(), 1).unwrap();
        assert_eq!(grid.rows, vec![vec!["Alice", "30"], vec!["Carol", "41"]]);
    }

    #[test]
    fn test_delete_row_out_of_range() {
        assert!(delete_row(&people(), 3).is_err());
        assert!(delete_row(&Grid::default(), 0).is_err());
    }
}
