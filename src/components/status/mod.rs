//! Status bar component.
//!
//! Displays session, API and loading information.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::AppStore;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status bar: `flowdesk | Session: ada | API: https://... | loading...`
#[component]
pub fn Status() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore must be provided at root");

    let session = store.session();
    let session_name = Signal::derive(move || session.with(|s| s.display_name()));
    let loading = store.loading();
    let api_base = store.api_base();

    view! {
        <header class=css::bar>
            <div class=css::section>
                <span class=css::appName>{APP_NAME}</span>

                // Session
                <span class=css::label>
                    <span class=css::labelText>"Session:"</span>
                    <span class=css::labelIcon><Icon icon=ic::USER /></span>
                    <span class=css::value>{session_name}</span>
                </span>

                // API
                <span class=css::labelCyan>
                    <span class=css::labelText>"API:"</span>
                    <span class=css::labelIcon><Icon icon=ic::NETWORK /></span>
                    <span class=css::value>{api_base}</span>
                </span>
            </div>

            <Show when=move || loading.get()>
                <span class=css::loading aria-live="polite">"loading..."</span>
            </Show>
        </header>
    }
}
