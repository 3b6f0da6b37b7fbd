//! Step Indicator Component
//!
//! Pill rail across the top; any step can be selected directly.

use leptos::prelude::*;

use crate::store::{store_set_step, use_app_store, AppStateStoreFields};
use crate::wizard::WizardStep;

#[component]
pub fn StepIndicator() -> impl IntoView {
    let store = use_app_store();
    let current = move || store.step().get();

    view! {
        <div class="step-rail">
            {WizardStep::all().into_iter().map(|step| {
                let pill_class = move || {
                    let now = current();
                    if now == step {
                        "step-pill current"
                    } else if step.is_done_relative_to(now) {
                        "step-pill done"
                    } else {
                        "step-pill"
                    }
                };
                view! {
                    <>
                        {(step.index() > 0).then(|| view! {
                            <div class=move || {
                                if current().index() >= step.index() { "step-connector done" } else { "step-connector" }
                            } />
                        })}
                        <div class=pill_class on:click=move |_| store_set_step(&store, step)>
                            {move || if step.is_done_relative_to(current()) { "✓ " } else { "" }}
                            {format!("{}. {}", step.index() + 1, step.label())}
                        </div>
                    </>
                }
            }).collect_view()}
        </div>
    }
}
