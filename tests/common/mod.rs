//! Common test utilities and assertion helpers.
//!
//! Builders for CSV text and grids, plus a loaded-editor shortcut.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use csvedit::{CsvEditor, Grid};

/// The two-person sample used across the suite.
pub const PEOPLE: &str = "name,age\nAlice,30\nBob,25";

/// Build CSV text from a header row and data rows.
#[must_use]
pub fn csv_text(headers: &[&str], rows: &[&[&str]]) -> String {
    std::iter::once(headers)
        .chain(rows.iter().copied())
        .map(|cells| cells.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a grid from string slices.
#[must_use]
pub fn grid(headers: &[&str], rows: &[&[&str]]) -> Grid {
    Grid::new(
        headers.iter().map(|s| (*s).to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|s| (*s).to_string()).collect())
            .collect(),
    )
}

/// An editor with `text` already loaded.
#[must_use]
pub fn loaded_editor(text: &str) -> CsvEditor {
    let mut editor = CsvEditor::default();
    editor.load_text(text).expect("sample should load");
    editor
}

/// Export the editor's grid as text.
#[must_use]
pub fn exported(editor: &CsvEditor) -> String {
    editor.export().expect("editor should be loaded").contents
}
