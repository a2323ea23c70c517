//! Root application module.
//!
//! Contains the main App component, which exposes the shared [`AppStore`]
//! to every descendant through context.

use leptos::prelude::*;

use crate::components::{AppRouter, Status};
use crate::core::AppStore;

/// Root application component with error boundary.
///
/// This component:
/// - Provides the store created by the bootstrapper as context
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the status bar and the router
#[component]
pub fn App(store: AppStore) -> impl IntoView {
    provide_context(store);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f7f8fa;
                    color: #1f2933;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c92a2a; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #52606d; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            margin: 0 0 1rem 0;
                            padding-left: 1.5rem;
                            color: #c92a2a;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = crate::utils::dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2f6fde;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <div class="flowdesk">
                <Status />
                <AppRouter />
            </div>
        </ErrorBoundary>
    }
}
