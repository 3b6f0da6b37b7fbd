//! Application Context
//!
//! Non-state values shared via Leptos Context API.

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::AppConfig;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// The preview card element, captured on export
    pub card_ref: NodeRef<Div>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            card_ref: NodeRef::new(),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
