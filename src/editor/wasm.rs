//! JavaScript-facing wrapper around [`CsvEditor`].
//!
//! The host page owns the DOM: it renders the table from `headers()` /
//! `rows()` and re-renders when the change callback fires. The callback is
//! invoked after the editor borrow is released, so it may call back into
//! `CsvEdit`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::File;

use super::file_input::read_file_text;
use super::{ChangeKind, CsvEditor};
use crate::config::EditorConfig;
use crate::error::CsvEditError;
use crate::export::download::trigger_download;

type SharedCallback = Rc<RefCell<Option<Function>>>;

/// The editing widget exported to JavaScript.
#[wasm_bindgen]
pub struct CsvEdit {
    editor: Rc<RefCell<CsvEditor>>,
    change_callback: SharedCallback,
}

#[wasm_bindgen]
impl CsvEdit {
    /// Create an editor. `config` is an optional plain object with any of
    /// the `EditorConfig` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<CsvEdit, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                serde_wasm_bindgen::from_value::<EditorConfig>(value)
                    .map_err(|e| CsvEditError::Config(e.to_string()))?
            }
            _ => EditorConfig::default(),
        };

        Ok(CsvEdit {
            editor: Rc::new(RefCell::new(CsvEditor::new(config)?)),
            change_callback: Rc::new(RefCell::new(None)),
        })
    }

    /// Register the function called with a change object after each model
    /// change. Pass `undefined` to remove it.
    #[wasm_bindgen]
    pub fn set_change_callback(&mut self, callback: Option<Function>) {
        *self.change_callback.borrow_mut() = callback;
    }

    /// Whether a file with this name passes the extension filter.
    #[wasm_bindgen]
    pub fn accepts(&self, file_name: &str) -> bool {
        self.editor.borrow().check_file_name(file_name).is_ok()
    }

    /// Comma-separated accept list for `<input type="file" accept=...>`.
    #[wasm_bindgen]
    pub fn accept_attribute(&self) -> String {
        self.editor.borrow().config().accept.join(",")
    }

    /// Read a dropped or selected file and replace the grid.
    ///
    /// The returned promise rejects on an unsupported name, a read failure,
    /// an empty file, or when a newer `load_file` call superseded this one.
    #[wasm_bindgen]
    pub fn load_file(&self, file: File) -> Promise {
        let editor = Rc::clone(&self.editor);
        let callback = Rc::clone(&self.change_callback);

        future_to_promise(async move {
            let ticket = {
                let mut ed = editor.borrow_mut();
                ed.check_file_name(&file.name())?;
                ed.begin_load()
            };

            let text = read_file_text(&file).await?;
            let change = editor.borrow_mut().finish_load(ticket, &text)?;
            notify(&callback, change);
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Replace the grid with parsed `text`.
    #[wasm_bindgen]
    pub fn load_text(&self, text: &str) -> Result<(), JsValue> {
        let change = self.editor.borrow_mut().load_text(text)?;
        notify(&self.change_callback, change);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn edit_cell(
        &self,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<(), JsValue> {
        let change = self.editor.borrow_mut().edit_cell(row, col, value)?;
        notify(&self.change_callback, change);
        Ok(())
    }

    /// Append an empty row and return its index.
    #[wasm_bindgen]
    pub fn add_row(&self) -> Result<usize, JsValue> {
        let change = self.editor.borrow_mut().add_row()?;
        notify(&self.change_callback, change);
        match change {
            ChangeKind::RowAdded { index } => Ok(index),
            _ => Err(JsValue::from_str("unexpected change kind")),
        }
    }

    #[wasm_bindgen]
    pub fn delete_row(&self, index: usize) -> Result<(), JsValue> {
        let change = self.editor.borrow_mut().delete_row(index)?;
        notify(&self.change_callback, change);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn is_loaded(&self) -> bool {
        self.editor.borrow().is_loaded()
    }

    /// Header cells, or an empty array before a file is loaded.
    #[wasm_bindgen]
    pub fn headers(&self) -> Vec<String> {
        self.editor
            .borrow()
            .grid()
            .map(|g| g.headers.clone())
            .unwrap_or_default()
    }

    /// Data rows as an array of string arrays.
    #[wasm_bindgen]
    pub fn rows(&self) -> Result<JsValue, JsValue> {
        let editor = self.editor.borrow();
        let rows = editor.grid().map(|g| g.rows.as_slice()).unwrap_or_default();
        to_js(&rows)
    }

    /// The whole grid as `{ headers, rows }`, or `null` when empty.
    #[wasm_bindgen]
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        match self.editor.borrow().grid() {
            Some(grid) => to_js(grid),
            None => Ok(JsValue::NULL),
        }
    }

    /// Column-count warnings for the current grid.
    #[wasm_bindgen]
    pub fn issues(&self) -> Result<JsValue, JsValue> {
        to_js(&self.editor.borrow().issues())
    }

    /// Current grid as CSV text.
    #[wasm_bindgen]
    pub fn export_text(&self) -> Result<String, JsValue> {
        Ok(self.editor.borrow().export()?.contents)
    }

    /// Trigger a browser download of the current grid.
    #[wasm_bindgen]
    pub fn download(&self) -> Result<(), JsValue> {
        let download = self.editor.borrow().export()?;
        trigger_download(&download)
    }
}

fn notify(callback: &SharedCallback, change: ChangeKind) {
    let Some(func) = callback.borrow().clone() else {
        return;
    };
    match serde_wasm_bindgen::to_value(&change) {
        Ok(arg) => {
            if let Err(e) = func.call1(&JsValue::NULL, &arg) {
                web_sys::console::error_2(&JsValue::from_str("change callback failed:"), &e);
            }
        }
        Err(e) => tracing::warn!(%e, "could not serialize change"),
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
