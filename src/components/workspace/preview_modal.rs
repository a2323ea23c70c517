//! Preview modal.
//!
//! Shows the activated file: an image for server-previewable content,
//! preformatted text once fetched content arrives, or an informational
//! notice when the file cannot be previewed. A download link is always
//! offered.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{ModalContent, PreviewState};

stylance::import_crate_style!(css, "src/components/workspace/preview_modal.module.css");

/// Modal dialog for the most recently activated file.
///
/// Mounted only while `open` is true. Escape, the close button and a click
/// on the backdrop all close it.
#[component]
pub fn PreviewModal(#[prop(into)] preview: Signal<PreviewState>, open: RwSignal<bool>) -> impl IntoView {
    let close = move || open.set(false);

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || keydown.remove());

    let file_name = Signal::derive(move || preview.with(|p| p.file_name.clone()));
    let download_url = Signal::derive(move || preview.with(|p| p.download_url.clone()));

    view! {
        <div class=css::backdrop on:click=move |_| close()>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-label=move || format!("Preview of {}", file_name.get())
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <header class=css::header>
                    <span class=css::filename>{move || file_name.get()}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| close()
                        title="Close preview"
                        aria-label="Close preview"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::body>
                    {move || {
                        let state = preview.get();
                        render_content(state.content, state.is_server_previewable, state.file_name)
                    }}
                </div>

                <footer class=css::footer>
                    <a class=css::downloadButton href=move || download_url.get() download=move || file_name.get()>
                        <Icon icon=ic::DOWNLOAD />
                        "Download"
                    </a>
                </footer>
            </div>
        </div>
    }
}

fn render_content(content: ModalContent, server_previewable: bool, file_name: String) -> AnyView {
    match content {
        ModalContent::Empty => ().into_any(),
        ModalContent::Notice(message) => view! { <Notice message=message /> }.into_any(),
        ModalContent::Url(url) if server_previewable => view! {
            <img class=css::image src=url alt=file_name />
        }
        .into_any(),
        ModalContent::Url(url) => view! {
            <p class=css::placeholder>{url}</p>
        }
        .into_any(),
        ModalContent::Text(text) => view! {
            <pre class=css::text>{text}</pre>
        }
        .into_any(),
    }
}

/// Dismissible informational banner.
#[component]
fn Notice(message: String) -> impl IntoView {
    let (visible, set_visible) = signal(true);

    view! {
        <Show when=move || visible.get()>
            <div class=css::notice role="status">
                <span class=css::noticeIcon><Icon icon=ic::INFO /></span>
                <span class=css::noticeText>{message.clone()}</span>
                <button
                    class=css::noticeDismiss
                    on:click=move |_| set_visible.set(false)
                    aria-label="Dismiss"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </Show>
    }
}
