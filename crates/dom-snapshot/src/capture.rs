//! Element Capture
//!
//! Calls the loaded DOM-to-canvas function and encodes the canvas as PNG.

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::{describe_js, SnapshotError};

/// Options passed straight to html2canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    /// Supersampling factor
    pub scale: f64,
    /// `None` serializes as `null`, which keeps the background transparent
    pub background_color: Option<String>,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub logging: bool,
}

impl CaptureOptions {
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    fn to_js(&self) -> Result<JsValue, SnapshotError> {
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
        self.serialize(&serializer)
            .map_err(|e| SnapshotError::Capture(e.to_string()))
    }
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 3.0,
            background_color: None,
            use_cors: true,
            logging: false,
        }
    }
}

/// Capture `node` through `window[global]` and return a PNG data URL
pub async fn capture_png(
    node: &HtmlElement,
    global: &str,
    options: &CaptureOptions,
) -> Result<String, SnapshotError> {
    let window = web_sys::window().ok_or(SnapshotError::NoWindow)?;
    let capture = Reflect::get(&window, &JsValue::from_str(global))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| SnapshotError::Unavailable(global.to_string()))?;

    let opts = options.to_js()?;
    let pending = capture
        .call2(&JsValue::NULL, node, &opts)
        .map_err(|e| SnapshotError::Capture(describe_js(&e)))?;

    let canvas = JsFuture::from(Promise::resolve(&pending))
        .await
        .map_err(|e| SnapshotError::Capture(describe_js(&e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SnapshotError::Capture("capture did not return a canvas".into()))?;

    tracing::debug!(width = canvas.width(), height = canvas.height(), "captured canvas");

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| SnapshotError::Capture(describe_js(&e)))
}
