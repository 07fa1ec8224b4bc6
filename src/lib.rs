//! csvedit - CSV editing widget for the web
//!
//! Drop a CSV file, edit it as a table, download the result:
//! - Plain comma/newline parsing into a header row plus data rows
//! - Edit cell, add row, delete row
//! - Export back to `edited_data.csv`
//!
//! The table itself is drawn by the host page; this crate owns the model.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { CsvEdit } from 'csvedit';
//! await init();
//! const editor = new CsvEdit();
//! editor.set_change_callback(() => renderTable(editor.headers(), editor.rows()));
//! await editor.load_file(droppedFile);
//! editor.edit_cell(1, 1, "26");
//! editor.download();
//! ```

pub mod config;
pub mod csv;
pub mod editor;
pub mod error;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod types;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use editor::CsvEdit;
pub use editor::{ChangeKind, CsvEditor, EditorState};
pub use error::{CsvEditError, Result};
pub use types::*;

/// Parse CSV text and return the grid as a `{ headers, rows }` object.
///
/// # Errors
/// Returns an error if the grid cannot be converted to a JS value.
#[wasm_bindgen]
pub fn parse_csv_to_js(text: &str) -> std::result::Result<JsValue, JsValue> {
    let grid = csv::parse_csv(text);
    serde_wasm_bindgen::to_value(&grid)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Serialize a `{ headers, rows }` object back to CSV text.
///
/// # Errors
/// Returns an error if `grid` does not have the expected shape.
#[wasm_bindgen]
pub fn serialize_csv_from_js(grid: JsValue) -> std::result::Result<String, JsValue> {
    let grid: Grid = serde_wasm_bindgen::from_value(grid)
        .map_err(|e| JsValue::from_str(&format!("Invalid grid: {e}")))?;
    Ok(csv::serialize_csv(&grid))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
