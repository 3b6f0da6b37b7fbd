//! Style Step Component
//!
//! Step 2: theme selection.

use leptos::prelude::*;

use crate::registry::THEMES;
use crate::store::{store_next_step, store_prev_step, use_app_store, AppStateStoreFields};

#[component]
pub fn StyleStep() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="panel">
            <h2 class="panel-title">"🎨 Step 2: Pick a card style"</h2>
            <div class="theme-list">
                {THEMES.iter().map(|theme| {
                    let is_selected = move || store.theme().with(|id| id == theme.id);
                    view! {
                        <button
                            type="button"
                            class="theme-btn"
                            style=move || format!(
                                "background: {}; border-color: {};",
                                theme.bg,
                                if is_selected() { theme.accent } else { "#E0E0E0" }
                            )
                            on:click=move |_| store.theme().set(theme.id.to_string())
                        >
                            <span class="theme-icon">{theme.icon}</span>
                            <div>
                                <div class="theme-label" style=format!("color: {};", theme.text)>{theme.label}</div>
                                <div class="theme-tagline" style=format!("color: {};", theme.sub)>{theme.tagline}</div>
                            </div>
                            <Show when=is_selected>
                                <span class="theme-check" style=format!("color: {};", theme.accent)>"✓"</span>
                            </Show>
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="nav-row">
                <button type="button" class="big-btn muted" on:click=move |_| store_prev_step(&store)>
                    "← Back"
                </button>
                <button type="button" class="big-btn primary grow" on:click=move |_| store_next_step(&store)>
                    "Next: Download →"
                </button>
            </div>
        </div>
    }
}
