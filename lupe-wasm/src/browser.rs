//! Browser platform glue: durable storage, clipboard, file reads, downloads.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

/// Single durable slot holding the last-seen source text as a plain string.
pub const STORAGE_KEY: &str = "lupe:last";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Last persisted source text, verbatim, if any.
pub fn restore() -> Option<String> {
    storage()?.get_item(STORAGE_KEY).ok().flatten()
}

/// Write-through on every document change; no batching.
pub fn persist(text: &str) {
    let Some(storage) = storage() else {
        gloo::console::warn!("persist: storage unavailable");
        return;
    };
    if storage.set_item(STORAGE_KEY, text).is_err() {
        gloo::console::warn!("persist: storage write failed");
    }
}

/// File contents as a `Uint8Array`, via the file's own promise.
pub fn read_file_bytes(file: web_sys::File) -> js_sys::Promise {
    future_to_promise(async move {
        let buf = JsFuture::from(file.array_buffer()).await?;
        Ok(js_sys::Uint8Array::new(&buf).into())
    })
}

/// Resolves with the clipboard text, or "" when the read was rejected.
/// Rejections are logged, never surfaced.
pub fn read_clipboard() -> js_sys::Promise {
    future_to_promise(async move {
        let Some(window) = web_sys::window() else {
            return Ok(JsValue::from_str(""));
        };
        match JsFuture::from(window.navigator().clipboard().read_text()).await {
            Ok(text) => Ok(text),
            Err(err) => {
                gloo::console::error!("clipboard read failed", err);
                Ok(JsValue::from_str(""))
            }
        }
    })
}

/// Resolves `true` when the write landed; failures are logged only.
pub fn write_clipboard(text: String) -> js_sys::Promise {
    future_to_promise(async move {
        let Some(window) = web_sys::window() else {
            return Ok(JsValue::FALSE);
        };
        match JsFuture::from(window.navigator().clipboard().write_text(&text)).await {
            Ok(_) => Ok(JsValue::TRUE),
            Err(err) => {
                gloo::console::error!("clipboard write failed", err);
                Ok(JsValue::FALSE)
            }
        }
    })
}

pub fn download_text(filename: &str, text: &str, mime: &str) {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));
    let bag = web_sys::BlobPropertyBag::new();
    bag.set_type(mime);
    match web_sys::Blob::new_with_str_sequence_and_options(&parts, &bag) {
        Ok(blob) => download_blob(filename, &blob),
        Err(err) => gloo::console::error!("download: blob creation failed", err),
    }
}

/// Browser-native download through a temporary object URL and a synthetic
/// anchor click.
pub fn download_blob(filename: &str, blob: &web_sys::Blob) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(blob) else {
        return;
    };
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(&url);
        anchor.set_download(filename);
        if let Some(body) = document.body() {
            let _ = body.append_child(&anchor);
            anchor.click();
            anchor.remove();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
