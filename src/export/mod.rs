//! CSV export.
//!
//! Builds the download payload from the current grid. Triggering the
//! browser download is in `download` (wasm32 only).

#[cfg(target_arch = "wasm32")]
pub(crate) mod download;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::csv::serialize_csv;
use crate::types::Grid;

/// A file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

/// Serialize `grid` into a download named per `config`.
pub fn export_csv(grid: &Grid, config: &EditorConfig) -> Download {
    let contents = serialize_csv(grid);
    tracing::debug!(
        file_name = %config.download_file_name,
        bytes = contents.len(),
        "exported csv"
    );
    Download {
        file_name: config.download_file_name.clone(),
        mime_type: config.mime_type.clone(),
        contents,
    }
}
