//! Plain comma-separated text <-> [`Grid`].
//!
//! The format is deliberately naive: lines are split on `\n` and cells on
//! `,`, with no quoting or escaping in either direction. A value containing
//! a comma or newline is split on parse and not protected on serialize.

use crate::types::Grid;

/// Cell separator.
pub const SEPARATOR: char = ',';
/// Row separator.
pub const LINE_BREAK: char = '\n';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop one trailing `\r` from every line (CRLF input).
    pub strip_carriage_return: bool,
}

/// Parse CSV text with default options.
pub fn parse_csv(text: &str) -> Grid {
    parse_csv_with(text, ParseOptions::default())
}

/// Parse CSV text into a [`Grid`].
///
/// The first line is always the header row, even when its cells are blank.
/// Later lines become data rows, except lines whose cells are all blank,
/// which are dropped. Only empty input yields a grid without headers.
pub fn parse_csv_with(text: &str, options: ParseOptions) -> Grid {
    if text.is_empty() {
        return Grid::default();
    }

    let mut lines = text.split(LINE_BREAK).map(|line| {
        if options.strip_carriage_return {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        }
    });

    let headers = lines.next().map(split_line).unwrap_or_default();
    let rows = lines
        .map(split_line)
        .filter(|cells| !is_blank(cells))
        .collect();

    Grid::new(headers, rows)
}

/// Serialize a grid: header row first, cells joined by `,`, rows by `\n`.
///
/// No trailing newline is written.
pub fn serialize_csv(grid: &Grid) -> String {
    let mut out = String::with_capacity(estimate_len(grid));
    write_line(&mut out, &grid.headers);
    for row in &grid.rows {
        out.push(LINE_BREAK);
        write_line(&mut out, row);
    }
    out
}

fn split_line(line: &str) -> Vec<String> {
    line.split(SEPARATOR).map(str::to_string).collect()
}

fn is_blank(cells: &[String]) -> bool {
    cells.iter().all(|cell| cell.trim().is_empty())
}

fn write_line(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(cell);
    }
}

fn estimate_len(grid: &Grid) -> usize {
    std::iter::once(&grid.headers)
        .chain(&grid.rows)
        .map(|cells| cells.iter().map(|c| c.len() + 1).sum::<usize>())
        .sum()
}
