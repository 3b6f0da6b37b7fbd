use leptos::prelude::*;

use crate::models::{DraftField, Rating};
use crate::store::{store_update_field, use_app_store, AppStateStoreFields};

/// Five star buttons; every star up to the rating is lit
#[component]
pub fn RatingPicker() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="rating-picker">
            {(Rating::MIN..=Rating::MAX).map(|n| {
                let lit = move || store.draft().with(|d| d.rating.value() >= n);
                view! {
                    <button
                        type="button"
                        class=move || if lit() { "rating-btn lit" } else { "rating-btn" }
                        on:click=move |_| store_update_field(&store, DraftField::Rating, n.to_string())
                    >
                        "★"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
