//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The API base URL is the only value resolved at runtime.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the status bar.
pub const APP_NAME: &str = "flowdesk";

/// Id of the host element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// API Configuration
// =============================================================================

/// Name of the `<meta>` tag that overrides the API base URL at runtime.
pub const API_BASE_META: &str = "flowdesk-api-base";

/// API base URL used when neither the meta tag nor the build environment set one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL.
///
/// Resolution order:
/// 1. `<meta name="flowdesk-api-base" content="...">` in the host document
/// 2. `FLOWDESK_API_BASE` at build time
/// 3. [`DEFAULT_API_BASE`]
pub fn api_base() -> String {
    let configured = crate::utils::dom::meta_content(API_BASE_META)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| option_env!("FLOWDESK_API_BASE").map(String::from));

    normalize_api_base(configured.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Trim whitespace and trailing slashes so paths can be appended with `/api/...`.
pub fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Timeout for store-layer requests (file listing, session check) in milliseconds.
///
/// Preview content fetches are not raced against a timeout.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Preview Configuration
// =============================================================================

/// Largest file (in bytes) that may be previewed in the modal.
pub const PREVIEW_SIZE_LIMIT: u64 = 5 * 1024 * 1024;

/// Human-readable form of [`PREVIEW_SIZE_LIMIT`] used in user messages.
pub const PREVIEW_LIMIT_LABEL: &str = "5MB";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
