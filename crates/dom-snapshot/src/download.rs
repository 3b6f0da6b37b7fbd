use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::{describe_js, SnapshotError};

/// Save a data URL under `filename` via a temporary anchor click
pub fn save_data_url(data_url: &str, filename: &str) -> Result<(), SnapshotError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(SnapshotError::NoWindow)?;
    let body = document.body().ok_or(SnapshotError::NoWindow)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| SnapshotError::Save(describe_js(&e)))?
        .dyn_into()
        .map_err(|_| SnapshotError::Save("created element is not an anchor".into()))?;
    anchor.set_href(data_url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| SnapshotError::Save(describe_js(&e)))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    tracing::info!(filename, "download triggered");
    Ok(())
}
