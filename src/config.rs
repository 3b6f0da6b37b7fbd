//! Runtime Configuration
//!
//! Defaults are compiled in; a page may override any subset by defining
//! `window.__PLACE_CARD_CONFIG__` before the app boots.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "__PLACE_CARD_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,
    pub api_version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1000,
            api_key: None,
            api_version: "2023-06-01".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub script_src: String,
    /// Name the library registers on `window`
    pub global_name: String,
    pub scale: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            script_src: "https://cdnjs.cloudflare.com/ajax/libs/html2canvas/1.4.1/html2canvas.min.js"
                .to_string(),
            global_name: "html2canvas".to_string(),
            scale: 3.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub export: ExportConfig,
    /// Pre-filled channel name for new drafts
    pub default_channel: Option<String>,
}

impl AppConfig {
    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<AppConfig>(raw) {
            Ok(config) => {
                tracing::info!(endpoint = %config.generator.endpoint, "loaded page config");
                config
            }
            Err(e) => {
                tracing::warn!("ignoring invalid {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }
}
