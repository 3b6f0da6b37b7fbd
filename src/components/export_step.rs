//! Export Step Component
//!
//! Step 3: download the card image, or start over.

use dom_snapshot::{CaptureOptions, Readiness};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{export_card, BrowserSink, CardRasterizer};
use crate::context::use_app_context;
use crate::store::{
    store_begin_export, store_finish_export, store_prev_step, store_start_over, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn ExportStep() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let is_exporting = move || store.exporting().with(|slot| slot.is_running());

    let on_download = move |_| {
        let Some(ticket) = store_begin_export(&store) else {
            return;
        };
        let readiness = store.capture_ready().get_untracked();
        let export = ctx.config().export;
        let rasterizer = ctx.card_ref.get_untracked().map(|node| CardRasterizer {
            node: node.into(),
            global: export.global_name.clone(),
            options: CaptureOptions::with_scale(export.scale),
        });
        let name = store.draft().with_untracked(|d| d.name.clone());

        spawn_local(async move {
            let millis = js_sys::Date::now() as u64;
            if let Ok(filename) =
                export_card(&readiness, rasterizer.as_ref(), &BrowserSink, name.as_deref(), millis).await
            {
                tracing::info!(%filename, "card exported");
            }
            store_finish_export(&store, ticket);
        });
    };

    let download_label = move || {
        if is_exporting() {
            "⏳ Saving..."
        } else {
            match store.capture_ready().get() {
                Readiness::Pending => "⏳ Loading image tool...",
                _ => "⬇️ Download Card Image",
            }
        }
    };

    view! {
        <div class="panel">
            <h2 class="panel-title">"📲 Step 3: Download your card!"</h2>
            <p class="panel-text">
                "Your card is ready! Tap the big button to save the image to your phone. Then you can add it to your video!"
            </p>
            <div class="howto">
                <div class="howto-title">"📱 How to add to your video:"</div>
                <ol class="howto-list">
                    <li>"Tap the download button below"</li>
                    <li>"Find the image in your Photos app"</li>
                    <li>"Add it to your video editing app as an overlay or image clip"</li>
                </ol>
            </div>
            <button
                type="button"
                class=move || if is_exporting() { "big-btn download busy" } else { "big-btn download" }
                disabled=is_exporting
                on:click=on_download
            >
                {download_label}
            </button>
            <div class="nav-row">
                <button type="button" class="big-btn muted small" on:click=move |_| store_prev_step(&store)>
                    "← Change Style"
                </button>
                <button type="button" class="big-btn soft small" on:click=move |_| store_start_over(&store)>
                    "+ New Place"
                </button>
            </div>
        </div>
    }
}
