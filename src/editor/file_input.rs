//! Reads a browser `File` as text.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::error::CsvEditError;

/// Read the whole file; the browser decodes it as UTF-8.
pub(crate) async fn read_file_text(file: &File) -> Result<String, CsvEditError> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| CsvEditError::Read(describe(&e)))?;
    value
        .as_string()
        .ok_or_else(|| CsvEditError::Read(format!("{} did not read as text", file.name())))
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}
