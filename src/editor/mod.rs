//! The editing widget's model.
//!
//! `CsvEditor` owns the grid and moves between two states:
//! - `Empty` until a non-empty file is ingested
//! - `Loaded` from then on (a later ingest replaces the grid)
//!
//! Edits go through the pure functions in [`mutation`]; every successful
//! change is reported as a [`ChangeKind`] to the optional change listener
//! and returned to the caller so a renderer can refresh.

#[cfg(target_arch = "wasm32")]
mod file_input;
pub mod mutation;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::CsvEdit;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::error::{CsvEditError, Result};
use crate::export::{export_csv, Download};
use crate::ingest::{self, LoadSequence, LoadTicket};
use crate::types::{Grid, GridIssue};

/// Observable widget state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No file loaded yet; only the drop zone is shown.
    #[default]
    Empty,
    /// A grid is loaded; table and actions are shown.
    Loaded(Grid),
}

/// What changed in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeKind {
    /// A new file replaced the grid.
    Loaded,
    CellEdited { row: usize, col: usize },
    RowAdded { index: usize },
    RowDeleted { index: usize },
}

/// Callback invoked after every model change.
pub type ChangeListener = Box<dyn FnMut(ChangeKind, &Grid)>;

pub struct CsvEditor {
    config: EditorConfig,
    state: EditorState,
    loads: LoadSequence,
    listener: Option<ChangeListener>,
}

impl std::fmt::Debug for CsvEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvEditor")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("loads", &self.loads)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl CsvEditor {
    /// Create an editor in the `Empty` state.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: EditorState::Empty,
            loads: LoadSequence::default(),
            listener: None,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The current grid, if loaded.
    pub fn grid(&self) -> Option<&Grid> {
        match &self.state {
            EditorState::Empty => None,
            EditorState::Loaded(grid) => Some(grid),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, EditorState::Loaded(_))
    }

    /// Install (or remove) the change listener.
    pub fn set_change_listener(&mut self, listener: Option<ChangeListener>) {
        self.listener = listener;
    }

    /// Reject files whose name does not match the accept list.
    pub fn check_file_name(&self, file_name: &str) -> Result<()> {
        if ingest::accepts(file_name, &self.config.accept) {
            Ok(())
        } else {
            Err(CsvEditError::UnsupportedFile(file_name.to_string()))
        }
    }

    /// Start an asynchronous read. Any read still in flight is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = self.loads.begin();
        tracing::debug!(ticket = ticket.id(), "load started");
        ticket
    }

    /// Apply the text of a finished read.
    ///
    /// Fails with `StaleLoad` when a newer read was started, and with
    /// `EmptyInput` when the text is empty. The state is unchanged
    /// on failure.
    pub fn finish_load(&mut self, ticket: LoadTicket, text: &str) -> Result<ChangeKind> {
        if let Err(e) = self.loads.check(ticket) {
            tracing::warn!(ticket = ticket.id(), "discarding superseded load");
            return Err(e);
        }
        let grid = ingest::ingest_text(text, self.config.parse_options())?;
        Ok(self.replace(grid, ChangeKind::Loaded))
    }

    /// Load CSV text synchronously.
    pub fn load_text(&mut self, text: &str) -> Result<ChangeKind> {
        let ticket = self.begin_load();
        self.finish_load(ticket, text)
    }

    /// Load a named file's raw bytes.
    pub fn load_bytes(&mut self, file_name: &str, bytes: &[u8]) -> Result<ChangeKind> {
        self.check_file_name(file_name)?;
        self.load_text(&ingest::decode_text(bytes))
    }

    pub fn edit_cell(&mut self, row: usize, col: usize, value: &str) -> Result<ChangeKind> {
        let next = mutation::edit_cell(self.loaded()?, row, col, value)?;
        tracing::debug!(row, col, "cell edited");
        Ok(self.replace(next, ChangeKind::CellEdited { row, col }))
    }

    /// Append an empty row; the change carries its index.
    pub fn add_row(&mut self) -> Result<ChangeKind> {
        let next = mutation::add_row(self.loaded()?);
        let index = next.row_count().saturating_sub(1);
        tracing::debug!(index, "row added");
        Ok(self.replace(next, ChangeKind::RowAdded { index }))
    }

    pub fn delete_row(&mut self, index: usize) -> Result<ChangeKind> {
        let next = mutation::delete_row(self.loaded()?, index)?;
        tracing::debug!(index, "row deleted");
        Ok(self.replace(next, ChangeKind::RowDeleted { index }))
    }

    /// Column-count mismatches in the current grid.
    pub fn issues(&self) -> Vec<GridIssue> {
        self.grid().map(Grid::issues).unwrap_or_default()
    }

    /// Serialize the current grid for download.
    pub fn export(&self) -> Result<Download> {
        Ok(export_csv(self.loaded()?, &self.config))
    }

    fn loaded(&self) -> Result<&Grid> {
        self.grid().ok_or(CsvEditError::NotLoaded)
    }

    fn replace(&mut self, grid: Grid, change: ChangeKind) -> ChangeKind {
        self.state = EditorState::Loaded(grid);
        if let (Some(listener), EditorState::Loaded(grid)) = (self.listener.as_mut(), &self.state)
        {
            listener(change, grid);
        }
        change
    }
}

impl Default for CsvEditor {
    fn default() -> Self {
        Self {
            config: EditorConfig::default(),
            state: EditorState::Empty,
            loads: LoadSequence::default(),
            listener: None,
        }
    }
}
