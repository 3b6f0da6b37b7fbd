//! Place Card Maker App
//!
//! Wizard panel on the left, live card preview on the right.

use dom_snapshot::Readiness;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{DetailsStep, ExportStep, InfoCard, StepIndicator, StyleStep};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};
use crate::wizard::WizardStep;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let store = Store::new(AppState::new(config.default_channel.clone()));
    let export = config.export.clone();

    // Provide state and context to all children
    provide_context(store);
    provide_context(AppContext::new(config));

    // Load the capture library once; export checks the resulting readiness
    spawn_local(async move {
        let result = dom_snapshot::ensure_script(&export.script_src, &export.global_name).await;
        if let Err(e) = &result {
            tracing::error!("image capture unavailable: {}", e);
        }
        store.capture_ready().set(Readiness::from_result(result));
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"🇰🇷 Korea Travel Card Maker"</h1>
                <p>"Make beautiful info cards for your YouTube videos — no design skills needed!"</p>
            </header>

            <StepIndicator />

            <div class="app-columns">
                <section class="app-column">
                    {move || match store.step().get() {
                        WizardStep::DataEntry => view! { <DetailsStep /> }.into_any(),
                        WizardStep::StyleSelect => view! { <StyleStep /> }.into_any(),
                        WizardStep::Export => view! { <ExportStep /> }.into_any(),
                    }}
                </section>

                <section class="app-column">
                    <div class="panel preview-panel">
                        <h3 class="preview-title">"👀 Live Preview"</h3>
                        <div class="preview-stage">
                            <InfoCard />
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}
