//! Browser download via `Blob` + object URL + hidden anchor click.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

use super::Download;

/// Hand `download` to the browser as a file download.
pub(crate) fn trigger_download(download: &Download) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let parts = Array::of1(&JsValue::from_str(&download.contents));
    let options = BlobPropertyBag::new();
    options.set_type(&download.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(&download.file_name);
    if let Err(e) = anchor.style().set_property("visibility", "hidden") {
        tracing::warn!(?e, "could not hide download anchor");
    }

    body.append_child(&anchor)?;
    anchor.click();
    if let Err(e) = body.remove_child(&anchor) {
        tracing::warn!(?e, "could not remove download anchor");
    }
    revoke_later(&window, url);
    Ok(())
}

/// Revoke `url` from a zero-delay timeout, after the click has been handled.
fn revoke_later(window: &Window, url: String) {
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            tracing::warn!(?e, "could not revoke object url");
        }
    });
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), 0)
    {
        tracing::warn!(?e, "could not schedule object url revoke");
    }
}
