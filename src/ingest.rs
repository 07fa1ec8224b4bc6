//! File ingest: extension filter, text decoding, load sequencing.
//!
//! Reading the file itself is platform specific (browser `File` or
//! filesystem) and lives with the caller; everything here is pure.

use crate::csv::{parse_csv_with, ParseOptions};
use crate::error::{CsvEditError, Result};
use crate::types::Grid;

const UTF8_BOM: &str = "\u{feff}";

/// Whether `file_name` ends in one of the `accept` extensions.
///
/// Comparison is ASCII case-insensitive. Only the name is checked.
pub fn accepts(file_name: &str, accept: &[String]) -> bool {
    accept.iter().any(|ext| {
        file_name.len() > ext.len()
            && file_name
                .get(file_name.len() - ext.len()..)
                .is_some_and(|tail| tail.eq_ignore_ascii_case(ext))
    })
}

/// Decode file bytes as UTF-8, replacing invalid sequences and dropping a
/// leading byte-order mark.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

/// Parse file text into a grid, failing only on empty text.
///
/// `text` is taken as decoded; a byte-order mark is dropped by
/// [`decode_text`] (or by the browser), not here.
pub fn ingest_text(text: &str, options: ParseOptions) -> Result<Grid> {
    let grid = parse_csv_with(text, options);
    if !grid.has_headers() {
        return Err(CsvEditError::EmptyInput);
    }

    for issue in grid.issues() {
        tracing::warn!(%issue, "ragged row");
    }
    tracing::debug!(
        columns = grid.column_count(),
        rows = grid.row_count(),
        "ingested csv"
    );
    Ok(grid)
}

/// Identifies one started read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Issues load tickets; only the most recent ticket may apply its result.
#[derive(Debug, Default)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a new read, superseding any read still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest = self.latest.saturating_add(1);
        LoadTicket(self.latest)
    }

    /// Ok when `ticket` is the latest one issued.
    pub fn check(&self, ticket: LoadTicket) -> Result<()> {
        if ticket.0 == self.latest {
            Ok(())
        } else {
            Err(CsvEditError::StaleLoad {
                ticket: ticket.0,
                latest: self.latest,
            })
        }
    }
}
