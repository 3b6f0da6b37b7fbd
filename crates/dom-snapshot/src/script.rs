//! Script Loader
//!
//! Injects a `<script>` tag once and resolves when the library it
//! provides is usable.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlScriptElement, Window};

use crate::{describe_js, SnapshotError};

/// Load state of an injected library
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Readiness {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }

    pub fn from_result(result: Result<(), SnapshotError>) -> Self {
        match result {
            Ok(()) => Readiness::Ready,
            Err(e) => Readiness::Failed(e.to_string()),
        }
    }
}

/// Whether `window[global]` is a callable function
pub fn is_global_defined(window: &Window, global: &str) -> bool {
    Reflect::get(window, &JsValue::from_str(global))
        .map(|v| v.is_function())
        .unwrap_or(false)
}

/// Make sure the script at `src` is loaded and exposes `global`.
///
/// Returns immediately if the global already exists. A `<script>` with the
/// same `src` that is still loading gets listeners attached instead of a
/// second injection.
pub async fn ensure_script(src: &str, global: &str) -> Result<(), SnapshotError> {
    let window = web_sys::window().ok_or(SnapshotError::NoWindow)?;
    if is_global_defined(&window, global) {
        tracing::debug!(global, "script global already present");
        return Ok(());
    }
    let document = window.document().ok_or(SnapshotError::NoWindow)?;

    let load_err = |reason: String| SnapshotError::ScriptLoad {
        src: src.to_string(),
        reason,
    };

    let existing = document
        .query_selector(&format!("script[src=\"{}\"]", src))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok());

    let script = match existing {
        Some(script) => script,
        None => {
            let script: HtmlScriptElement = document
                .create_element("script")
                .map_err(|e| load_err(describe_js(&e)))?
                .dyn_into()
                .map_err(|_| load_err("created element is not a script".into()))?;
            script.set_src(src);
            script.set_async(true);
            let head = document.head().ok_or(SnapshotError::NoWindow)?;
            head.append_child(&script)
                .map_err(|e| load_err(describe_js(&e)))?;
            tracing::info!(src, "injected script");
            script
        }
    };

    let mut attach_err = None;
    let loaded = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(e) = script.add_event_listener_with_callback("load", &resolve) {
            attach_err = Some(e);
        }
        if let Err(e) = script.add_event_listener_with_callback("error", &reject) {
            attach_err = Some(e);
        }
    });
    if let Some(e) = attach_err {
        return Err(load_err(describe_js(&e)));
    }

    JsFuture::from(loaded)
        .await
        .map_err(|_| load_err("network or parse error".into()))?;

    if is_global_defined(&window, global) {
        tracing::info!(global, "script ready");
        Ok(())
    } else {
        Err(SnapshotError::Unavailable(global.to_string()))
    }
}
