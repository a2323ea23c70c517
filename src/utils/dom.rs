//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Outside `wasm32` every accessor reports the API as unavailable, so code
//! built on top of it can be unit tested natively.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::core::error::MountError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Get the host document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Find the element the application mounts into.
pub fn mount_element(id: &str) -> Result<HtmlElement, MountError> {
    let document = document().ok_or(MountError::NoDocument)?;
    document
        .get_element_by_id(id)
        .map(|element| element.unchecked_into::<HtmlElement>())
        .ok_or_else(|| MountError::MissingElement(id.to_string()))
}

/// Read the `content` attribute of `<meta name="...">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    document()?
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?
        .get_attribute("content")
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history and fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}
