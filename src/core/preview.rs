//! Preview planning.
//!
//! Decides what the preview modal shows when a row is activated, and how
//! fetched content is turned into displayable text.

use serde_json::Value;

use super::api;
use super::mime::{check_constraints, matches_mime_type};
use crate::models::{ModalContent, PreviewState};

/// Build the modal state for an activated file.
///
/// - Constraint violation: the notice becomes the modal body, not server-previewable.
/// - Otherwise: the preview URL is the body, with `is_server_previewable`
///   taken from the matched whitelist rule. Non-server-previewable content
///   still has to be fetched (see [`PreviewState::needs_fetch`]).
pub fn plan_preview(api_base: &str, workflow_id: &str, name: &str, size: u64) -> PreviewState {
    let download_url = api::download_url(api_base, workflow_id, name);

    if let Some(notice) = check_constraints(name, size) {
        return PreviewState {
            file_name: name.to_string(),
            content: ModalContent::Notice(notice.to_string()),
            is_server_previewable: false,
            download_url,
        };
    }

    PreviewState {
        file_name: name.to_string(),
        content: ModalContent::Url(api::preview_url(api_base, workflow_id, name)),
        is_server_previewable: matches_mime_type(name).is_some_and(|rule| rule.server_previewable),
        download_url,
    }
}

/// Turn a fetched response body into the text shown in the modal.
///
/// Bodies that parse as JSON are decoded first: a JSON string is shown as its
/// value, any other JSON value is re-serialized compactly. Everything else is
/// shown verbatim.
pub fn render_fetched_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const API: &str = "http://localhost:8000";

    // =========================================================================
    // plan_preview
    // =========================================================================

    #[test]
    fn test_image_is_server_previewable() {
        let state = plan_preview(API, "abc123", "photo.png", 1000);
        assert!(state.is_server_previewable);
        assert!(!state.needs_fetch());
        match &state.content {
            ModalContent::Url(url) => {
                assert!(url.ends_with("?preview"));
                assert_eq!(
                    url,
                    "http://localhost:8000/api/workflows/abc123/workspace/photo.png?preview"
                );
            }
            other => panic!("expected preview URL, got {:?}", other),
        }
    }

    #[test]
    fn test_json_needs_fetch() {
        let state = plan_preview(API, "abc123", "notes.json", 1000);
        assert!(!state.is_server_previewable);
        assert!(state.needs_fetch());
        assert_eq!(
            state.download_url,
            "http://localhost:8000/api/workflows/abc123/workspace/notes.json"
        );
    }

    #[test]
    fn test_unsupported_shows_notice() {
        let state = plan_preview(API, "abc123", "data.csv", 1000);
        assert!(!state.is_server_previewable);
        assert!(!state.needs_fetch());
        assert_eq!(
            state.content,
            ModalContent::Notice("csv files cannot be previewed. Please use download.".into())
        );
    }

    #[test]
    fn test_oversized_shows_notice() {
        let state = plan_preview(API, "abc123", "photo.png", 6_000_000);
        assert!(!state.is_server_previewable);
        assert!(matches!(
            state.content,
            ModalContent::Notice(ref msg) if msg.contains("too big to be previewed (limit 5MB)")
        ));
        assert_eq!(state.file_name, "photo.png");
    }

    // =========================================================================
    // render_fetched_body
    // =========================================================================

    #[test]
    fn test_object_body_is_stringified() {
        let body = "{\n  \"status\": \"ok\",\n  \"count\": 3\n}";
        assert_eq!(render_fetched_body(body), r#"{"status":"ok","count":3}"#);
    }

    #[test]
    fn test_array_and_null_bodies() {
        assert_eq!(render_fetched_body("[1, 2, 3]"), "[1,2,3]");
        assert_eq!(render_fetched_body("null"), "null");
    }

    #[test]
    fn test_string_body_unwrapped() {
        assert_eq!(render_fetched_body(r#""hello""#), "hello");
    }

    #[test]
    fn test_plain_text_verbatim() {
        let text = "line one\nline two\n";
        assert_eq!(render_fetched_body(text), text);
    }
}
