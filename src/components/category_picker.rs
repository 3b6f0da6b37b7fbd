//! Category Picker Component
//!
//! One pill button per registered category.

use leptos::prelude::*;

use crate::models::DraftField;
use crate::registry::CATEGORIES;
use crate::store::{store_update_field, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryPicker() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="category-picker">
            {CATEGORIES.iter().map(|def| {
                let is_selected = move || store.draft().with(|d| d.category == def.category);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                        style=move || {
                            if is_selected() {
                                format!("border-color: {0}; background: {0};", def.color)
                            } else {
                                String::new()
                            }
                        }
                        on:click=move |_| store_update_field(&store, DraftField::Category, def.key.to_string())
                    >
                        {def.badge()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
