//! DOM Snapshot Utilities
//!
//! Loads a DOM-to-canvas library (html2canvas) on demand, captures an
//! element as a PNG data URL and saves it through a synthetic download.

mod capture;
mod download;
mod script;

pub use capture::{capture_png, CaptureOptions};
pub use download::save_data_url;
pub use script::{ensure_script, is_global_defined, Readiness};

use wasm_bindgen::{JsCast, JsValue};

/// Snapshot failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("no browser window or document available")]
    NoWindow,
    #[error("failed to load script {src}: {reason}")]
    ScriptLoad { src: String, reason: String },
    #[error("`{0}` is not available on window")]
    Unavailable(String),
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("saving file failed: {0}")]
    Save(String),
}

/// Best-effort readable text for a thrown JS value
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
