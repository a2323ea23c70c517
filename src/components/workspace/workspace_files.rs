//! Workspace file browser view.
//!
//! Mirrors the store's listing for a workflow into a local array that the
//! user can sort, and drives the preview modal.
//!
//! ## Data flow
//!
//! - `id` changes → dispatch [`Action::FetchWorkflowFiles`]
//! - store listing replaced → local array replaced wholesale (local sort order is lost)
//! - header click → [`SortState::toggle`] on the local array
//! - row activation → [`plan_preview`], plus a content fetch when the file
//!   is not server-previewable

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{FileTable, PreviewModal};
use crate::core::preview::{plan_preview, render_fetched_body};
use crate::core::sort::{SortColumn, SortState};
use crate::core::{Action, AppStore};
use crate::models::{FileEntry, FileList, ModalContent, PreviewState};
use crate::utils::{fetch_content, log};

stylance::import_crate_style!(css, "src/components/workspace/workspace.module.css");

/// Request issued when the view's workflow id changes.
fn listing_request(id: &str) -> Option<Action> {
    (!id.is_empty()).then(|| Action::FetchWorkflowFiles(id.to_string()))
}

/// Local copy of the store listing. Replaces the sorted array wholesale.
fn mirror_listing(listing: Option<FileList>) -> Vec<FileEntry> {
    listing.map(|list| list.to_vec()).unwrap_or_default()
}

/// Modal state for an activated row, plus the URL whose content still has
/// to be fetched and rendered client-side.
fn open_file(api_base: &str, id: &str, name: &str, size: u64) -> (PreviewState, Option<String>) {
    let state = plan_preview(api_base, id, name, size);
    let pending = match &state.content {
        ModalContent::Url(url) if state.needs_fetch() => Some(url.clone()),
        _ => None,
    };
    (state, pending)
}

/// File browser for one workflow's workspace.
///
/// # Props
/// - `id`: workflow identifier (non-empty)
#[component]
pub fn WorkspaceFiles(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore must be provided");

    let loading = store.loading();
    let listing = store.workflow_files(id);
    let error = store.workflow_error(id);

    // Local, sortable copy of the listing
    let files = RwSignal::new(Vec::<FileEntry>::new());
    let sort = RwSignal::new(SortState::default());

    // Preview modal
    let preview = RwSignal::new(PreviewState::default());
    let modal_open = RwSignal::new(false);

    // Initial load, repeated whenever the workflow id changes
    Effect::new(move || {
        if let Some(action) = id.with(|id| listing_request(id)) {
            store.dispatch(action);
        }
    });

    // List sync: only fires when the store replaces the listing
    Effect::new(move || {
        files.set(mirror_listing(listing.get()));
    });

    let on_sort = Callback::new(move |column: SortColumn| {
        let mut state = sort.get_untracked();
        files.update(|files| state.toggle(column, files));
        sort.set(state);
    });

    let on_open = Callback::new(move |(name, size): (String, u64)| {
        let (state, pending) = open_file(&store.api_base(), &id.get_untracked(), &name, size);

        preview.set(state);
        modal_open.set(true);

        // No request fencing: a late response overwrites whatever is shown.
        if let Some(url) = pending {
            spawn_local(async move {
                match fetch_content(&url).await {
                    Ok(body) => {
                        let text = render_fetched_body(&body);
                        let _ = preview.try_update(|p| p.content = ModalContent::Text(text));
                    }
                    Err(e) => log::warn(&format!("preview of {} failed: {}", url, e)),
                }
            });
        }
    });

    let is_empty = Signal::derive(move || files.with(|f| f.is_empty()));

    view! {
        <section class=css::workspace aria-label="Workspace files">
            <header class=css::heading>
                <h2 class=css::title>"Workspace"</h2>
                <span class=css::workflowId>{move || id.get()}</span>
            </header>

            {move || error.get().map(|msg| view! {
                <div class=css::error role="alert">
                    "Failed to load workspace: " {msg}
                </div>
            })}

            <FileTable
                files=files
                sort=sort
                on_sort=on_sort
                on_open=on_open
            />

            <Show when=move || is_empty.get()>
                <p class=css::emptyState>
                    {move || if loading.get() { "Loading files..." } else { "No files in this workspace" }}
                </p>
            </Show>

            <Show when=move || modal_open.get()>
                <PreviewModal preview=preview open=modal_open />
            </Show>
        </section>
    }
}
