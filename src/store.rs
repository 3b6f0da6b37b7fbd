//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use dom_snapshot::Readiness;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::GenerateError;
use crate::models::{DraftField, PlaceCardDraft};
use crate::registry::DEFAULT_THEME_ID;
use crate::task::{TaskSlot, TaskTicket};
use crate::wizard::WizardStep;

/// Wizard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The card being built
    pub draft: PlaceCardDraft,
    pub step: WizardStep,
    /// Selected theme id
    pub theme: String,
    /// html2canvas load state
    pub capture_ready: Readiness,
    /// Description request in flight
    pub generating: TaskSlot,
    /// Export in flight
    pub exporting: TaskSlot,
}

impl AppState {
    pub fn new(default_channel: Option<String>) -> Self {
        Self {
            draft: PlaceCardDraft {
                channel: default_channel,
                ..Default::default()
            },
            theme: DEFAULT_THEME_ID.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace one draft field from input text
pub fn store_update_field(store: &AppStore, field: DraftField, value: String) {
    store.draft().update(|draft| *draft = draft.with_field(field, value));
}

pub fn store_set_step(store: &AppStore, step: WizardStep) {
    tracing::debug!(?step, "wizard step");
    store.step().set(step);
}

pub fn store_next_step(store: &AppStore) {
    if let Some(next) = store.step().get_untracked().next() {
        store_set_step(store, next);
    }
}

pub fn store_prev_step(store: &AppStore) {
    if let Some(prev) = store.step().get_untracked().prev() {
        store_set_step(store, prev);
    }
}

/// "New Place": clear the draft except the channel, drop any pending
/// description and go back to data entry
pub fn store_start_over(store: &AppStore) {
    if store.generating().write().cancel() {
        tracing::info!("cancelled pending description");
    }
    store.draft().update(|draft| *draft = draft.reset());
    store_set_step(store, WizardStep::DataEntry);
}

pub fn store_begin_generation(store: &AppStore) -> Option<TaskTicket> {
    if !store.draft().with_untracked(|d| d.has_name()) {
        return None;
    }
    store.generating().write().begin()
}

/// Apply a finished description request if its ticket is still current
pub fn store_finish_generation(
    store: &AppStore,
    ticket: TaskTicket,
    outcome: Result<String, GenerateError>,
) {
    if !store.generating().write().finish(ticket) {
        tracing::debug!("discarding stale description result");
        return;
    }
    match outcome {
        Ok(text) => store_update_field(store, DraftField::Description, text),
        Err(e) => tracing::warn!("description generation failed: {}", e),
    }
}

pub fn store_begin_export(store: &AppStore) -> Option<TaskTicket> {
    store.exporting().write().begin()
}

pub fn store_finish_export(store: &AppStore, ticket: TaskTicket) {
    store.exporting().write().finish(ticket);
}
