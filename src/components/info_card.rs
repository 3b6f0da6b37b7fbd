//! Info Card Component
//!
//! Live preview of the place card. This element is what gets exported.

use leptos::prelude::*;

use crate::card::CardLayout;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

fn card_contents(card: CardLayout) -> impl IntoView {
    let theme = card.theme;
    let color = card.category.color;
    let tip_border = card.tip_border();

    view! {
        <div class="card-header" style=format!("background: {};", card.header_bg)>
            <div class="card-badge">{card.badge}</div>
            <h2 class="card-name">{card.name}</h2>
            {card.localized_name.map(|name| view! { <p class="card-localized">{name}</p> })}
        </div>
        <div class="card-body">
            {card.description.map(|text| view! {
                <p class="card-description" style=format!("color: {};", theme.text)>{text}</p>
            })}
            <div class="card-grid">
                {card.cells.into_iter().map(|cell| view! {
                    <div class="card-cell">
                        <span class="card-cell-label" style=format!("color: {};", theme.sub)>
                            {format!("{} {}", cell.icon, cell.label)}
                        </span>
                        <span class="card-cell-value" style=format!("color: {};", theme.text)>
                            {cell.value}
                        </span>
                    </div>
                }).collect_view()}
            </div>
            {card.tip.map(|tip| view! {
                <div
                    class="card-tip"
                    style=format!(
                        "background: {}; border: 1.5px solid {}; border-left: 4px solid {};",
                        theme.tip_tint, tip_border, color
                    )
                >
                    <div class="card-tip-label" style=format!("color: {};", color)>"✨ Tip"</div>
                    <div class="card-tip-text" style=format!("color: {};", theme.text)>{tip}</div>
                </div>
            })}
        </div>
        <div class="card-footer" style=format!("border-top: 1px solid {};", theme.divider)>
            <span class="card-channel" style=format!("color: {};", theme.sub)>{card.channel}</span>
            <span class="card-stars">{card.stars.glyphs()}</span>
        </div>
    }
}

#[component]
pub fn InfoCard() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let layout = Memo::new(move |_| {
        let theme = store.theme().get();
        store.draft().with(|draft| CardLayout::for_draft(draft, &theme))
    });

    view! {
        <div
            class="info-card"
            node_ref=ctx.card_ref
            style=move || format!("background: {};", layout.with(|card| card.theme.bg))
        >
            {move || card_contents(layout.get())}
        </div>
    }
}
