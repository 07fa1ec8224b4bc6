//! Editor configuration.
//!
//! Every field has a default, so an empty JS object or `{}` JSON file is a
//! valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv::ParseOptions;
use crate::error::{CsvEditError, Result};

/// Default name of the exported file.
pub const DEFAULT_FILE_NAME: &str = "edited_data.csv";
/// Default MIME type of the exported file.
pub const DEFAULT_MIME_TYPE: &str = "text/csv;charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// File name offered for the download.
    pub download_file_name: String,
    /// MIME type of the download blob.
    pub mime_type: String,
    /// Accepted file extensions, each including the leading dot.
    pub accept: Vec<String>,
    /// Drop one trailing `\r` from every line while parsing.
    pub strip_carriage_return: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            download_file_name: DEFAULT_FILE_NAME.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            accept: vec![".csv".to_string()],
            strip_carriage_return: false,
        }
    }
}

impl EditorConfig {
    /// Read a JSON configuration file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can produce a usable editor.
    pub fn validate(&self) -> Result<()> {
        if self.download_file_name.trim().is_empty() {
            return Err(CsvEditError::Config("download_file_name is empty".into()));
        }
        if self.accept.is_empty() {
            return Err(CsvEditError::Config("accept list is empty".into()));
        }
        if let Some(bad) = self.accept.iter().find(|ext| !ext.starts_with('.')) {
            return Err(CsvEditError::Config(format!(
                "accepted extension {bad:?} must start with '.'"
            )));
        }
        Ok(())
    }

    /// Parser options derived from this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strip_carriage_return: self.strip_carriage_return,
        }
    }
}
