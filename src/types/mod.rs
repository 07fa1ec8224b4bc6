//! Data types for the CSV editor.

mod grid;

pub use grid::*;
