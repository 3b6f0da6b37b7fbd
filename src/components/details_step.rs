//! Details Step Component
//!
//! Step 1: category, names, description (with the auto-write helper),
//! practical info, tip and rating.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{can_generate, generate_description, MessagesClient};
use crate::context::use_app_context;
use crate::models::DraftField;
use crate::store::{
    store_begin_generation, store_finish_generation, store_next_step, use_app_store,
    AppStateStoreFields,
};

use super::{CategoryPicker, FieldInput, RatingPicker};

#[component]
pub fn DetailsStep() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let is_generating = move || store.generating().with(|slot| slot.is_running());
    let generate_enabled = move || {
        store.draft().with(|draft| store.generating().with(|slot| can_generate(draft, slot)))
    };

    let on_generate = move |_| {
        let Some(ticket) = store_begin_generation(&store) else {
            return;
        };
        let draft = store.draft().get_untracked();
        let client = MessagesClient::new(ctx.config().generator);
        tracing::info!(name = ?draft.name, "requesting description");
        spawn_local(async move {
            let outcome = generate_description(&client, &draft).await;
            store_finish_generation(&store, ticket, outcome);
        });
    };

    view! {
        <div class="panel">
            <h2 class="panel-title">"📝 Step 1: Tell us about the place"</h2>

            <div class="field">
                <label class="field-label">"Category *"</label>
                <CategoryPicker />
            </div>

            <FieldInput field=DraftField::Name label="Place Name (English) *" placeholder="e.g. Gyeongbokgung Palace" />
            <FieldInput field=DraftField::LocalizedName label="Korean Name (optional)" placeholder="e.g. 경복궁" />
            <FieldInput field=DraftField::Channel label="Your Channel Name" placeholder="e.g. Mom's Korea Travel" />
            <FieldInput
                field=DraftField::Description
                label="Short Description (English)"
                placeholder="A short description about this place..."
                multiline=true
            />

            <button
                type="button"
                class=move || if is_generating() { "generate-btn busy" } else { "generate-btn" }
                disabled=move || !generate_enabled()
                on:click=on_generate
            >
                {move || if is_generating() {
                    "✨ Writing description..."
                } else {
                    "✨ Auto-write description for me!"
                }}
            </button>

            <div class="field-grid">
                <FieldInput field=DraftField::Address label="📍 Area / Address" placeholder="e.g. Jongno-gu, Seoul" />
                <FieldInput field=DraftField::Hours label="🕐 Opening Hours" placeholder="e.g. 9am – 6pm daily" />
                <FieldInput field=DraftField::Price label="💰 Price Range" placeholder="e.g. ₩10,000–20,000" />
                <FieldInput field=DraftField::Transit label="🚇 Nearest Subway" placeholder="e.g. Gyeongbokgung Stn." />
            </div>

            <FieldInput field=DraftField::Tip label="✨ Your Personal Tip" placeholder="e.g. Go early morning to avoid crowds!" />

            <div class="field">
                <label class="field-label">"⭐ Your Rating"</label>
                <RatingPicker />
            </div>

            <button type="button" class="big-btn primary wide" on:click=move |_| store_next_step(&store)>
                "Next: Pick a Style →"
            </button>
        </div>
    }
}
