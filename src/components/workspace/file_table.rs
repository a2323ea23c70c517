//! Sortable file table.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::mime::matches_mime_type;
use crate::core::sort::{SortColumn, SortDirection, SortState};
use crate::models::FileEntry;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/workspace/file_table.module.css");

/// Get icon for a file based on its whitelisted MIME prefix.
fn get_icon(name: &str) -> IconData {
    match matches_mime_type(name).map(|rule| rule.prefix) {
        Some("image/") => ic::FILE_IMAGE,
        Some("text/") => ic::FILE_TEXT,
        Some("application/json") => ic::FILE_CODE,
        _ => ic::FILE,
    }
}

/// Key of a rendered row.
///
/// Rows capture their entry when built and are reused while the key is
/// unchanged, so the key covers every displayed field.
fn row_key(entry: &FileEntry) -> FileEntry {
    entry.clone()
}

/// Table of workspace files with clickable column headers.
///
/// Rows are rendered in the order of `files`; sorting is the parent's job
/// (via `on_sort`). Activating a row calls `on_open` with name and size.
#[component]
pub fn FileTable(
    #[prop(into)] files: Signal<Vec<FileEntry>>,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<SortColumn>,
    on_open: Callback<(String, u64)>,
) -> impl IntoView {
    view! {
        <div class=css::table role="grid" aria-label="Workspace files">
            <div class=css::headerRow role="row">
                <span class=css::headerIcon></span>
                {SortColumn::ALL
                    .into_iter()
                    .map(|column| view! { <ColumnHeader column=column sort=sort on_sort=on_sort /> })
                    .collect_view()}
            </div>
            <For
                each=move || files.get()
                key=row_key
                children=move |entry| view! { <FileRow entry=entry on_open=on_open /> }
            />
        </div>
    }
}

#[component]
fn ColumnHeader(
    column: SortColumn,
    sort: Signal<SortState>,
    on_sort: Callback<SortColumn>,
) -> impl IntoView {
    let direction = Signal::derive(move || sort.get().direction_for(column));

    let class = match column {
        SortColumn::Name => css::headerName,
        SortColumn::LastModified => css::headerDate,
        SortColumn::Size => css::headerSize,
    };

    let aria_sort = move || match direction.get() {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    };

    view! {
        <button
            class=class
            role="columnheader"
            aria-sort=aria_sort
            on:click=move |_| on_sort.run(column)
        >
            {column.label()}
            <span class=css::sortArrow aria-hidden="true">
                {move || match direction.get() {
                    Some(SortDirection::Ascending) => Some(view! { <Icon icon=ic::SORT_ASCENDING /> }),
                    Some(SortDirection::Descending) => Some(view! { <Icon icon=ic::SORT_DESCENDING /> }),
                    None => None,
                }}
            </span>
        </button>
    }
}

#[component]
fn FileRow(entry: FileEntry, on_open: Callback<(String, u64)>) -> impl IntoView {
    let icon = get_icon(&entry.name);
    let size = entry.size;
    let size_display = format_size(Some(size), false);
    let modified = entry.last_modified.to_string();
    let aria_label = format!("File: {}", entry.name);

    let name_for_click = entry.name.clone();
    let name_for_key = entry.name.clone();

    let handle_click = move |_: leptos::ev::MouseEvent| {
        on_open.run((name_for_click.clone(), size));
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            on_open.run((name_for_key.clone(), size));
        }
    };

    view! {
        <div
            class=css::row
            role="row"
            tabindex="0"
            aria-label=aria_label
            on:click=handle_click
            on:keydown=handle_keydown
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name>{entry.name}</span>
            <span class=css::date>{modified}</span>
            <span class=css::size title=format!("{} bytes", size)>{size_display}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::Modified;

    #[test]
    fn test_row_key_tracks_metadata() {
        let small = FileEntry::new("report.txt", Modified::Unix(1), 10);
        let large = FileEntry::new("report.txt", Modified::Unix(1), 9 * 1024 * 1024);
        let touched = FileEntry::new("report.txt", Modified::Unix(2), 10);

        // Same name in another workflow's listing must not reuse the old row
        let keys: HashSet<_> = [&small, &large, &touched].into_iter().map(row_key).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(row_key(&small), row_key(&small.clone()));
    }
}
