//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `#/workflows/<id>` selects the workspace
//! - **The workspace view stays mounted while only the id changes**, so it
//!   refetches instead of being rebuilt

use leptos::prelude::*;
use leptos_icons::Icon;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::icons as ic;
use crate::components::workspace::WorkspaceFiles;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// - `#/` → landing panel with a workflow-id form
/// - `#/workflows/<id>` → workspace file browser
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = crate::utils::dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let workflow_id = Memo::new(move |_| route.with(|r| r.workflow_id().map(String::from)));
    let has_workflow = Signal::derive(move || workflow_id.with(|id| id.is_some()));
    let id = Signal::derive(move || workflow_id.get().unwrap_or_default());

    view! {
        <main class=css::main>
            <Show when=move || has_workflow.get() fallback=|| view! { <Landing /> }>
                <WorkspaceFiles id=id />
            </Show>
        </main>
    }
}

/// Landing panel asking for a workflow id.
#[component]
fn Landing() -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(input) = input_ref.get() {
            let route = AppRoute::workspace(&input.value());
            if route != AppRoute::Home {
                route.push();
            }
        }
    };

    view! {
        <div class=css::landing>
            <span class=css::landingIcon><Icon icon=ic::FOLDER /></span>
            <p class=css::landingText>"Open a workflow workspace"</p>
            <form class=css::form on:submit=on_submit>
                <input
                    class=css::input
                    node_ref=input_ref
                    type="text"
                    placeholder="Workflow ID"
                    aria-label="Workflow ID"
                />
                <button class=css::submit type="submit">"Browse"</button>
            </form>
        </div>
    }
}
