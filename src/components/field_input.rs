//! Field Input Component
//!
//! Labelled text input bound to one draft field.

use leptos::prelude::*;

use crate::models::DraftField;
use crate::store::{store_update_field, use_app_store, AppStateStoreFields};

#[component]
pub fn FieldInput(
    field: DraftField,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    /// Render a textarea instead of a single-line input
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let store = use_app_store();

    let value = move || store.draft().with(|d| d.field_text(field));

    let control = if multiline {
        view! {
            <textarea
                class="field-input field-textarea"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| store_update_field(&store, field, event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class="field-input"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| store_update_field(&store, field, event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            {control}
        </div>
    }
}
