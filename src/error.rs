//! Structured error types for csvedit.

/// All errors that can occur while ingesting, editing, or exporting a grid.
#[derive(Debug, thiserror::Error)]
pub enum CsvEditError {
    /// File name does not match any accepted extension.
    #[error("Unsupported file: {0} (expected a .csv file)")]
    UnsupportedFile(String),

    /// The file could not be read.
    #[error("Read failed: {0}")]
    Read(String),

    /// The file was empty.
    #[error("File is empty")]
    EmptyInput,

    /// An edit or export was requested before any file was loaded.
    #[error("No file loaded")]
    NotLoaded,

    /// Row index past the end of the grid.
    #[error("Row {index} out of range (grid has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// Column index past the end of a row.
    #[error("Column {index} out of range (row {row} has {len} cells)")]
    ColumnOutOfRange { row: usize, index: usize, len: usize },

    /// A read finished after a newer one was started.
    #[error("Load {ticket} superseded by load {latest}")]
    StaleLoad { ticket: u64, latest: u64 },

    /// Invalid editor configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CsvEditError>;

#[cfg(target_arch = "wasm32")]
impl From<CsvEditError> for wasm_bindgen::JsValue {
    fn from(e: CsvEditError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
