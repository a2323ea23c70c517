//! MIME classification and preview constraints.
//!
//! A file can be previewed when its MIME type (guessed from the name) starts
//! with one of the whitelisted prefixes and it is no larger than
//! [`PREVIEW_SIZE_LIMIT`]. Everything else is offered for download only.

use std::fmt;

use crate::config::{PREVIEW_LIMIT_LABEL, PREVIEW_SIZE_LIMIT};
use crate::models::file_extension;

// =============================================================================
// Whitelist
// =============================================================================

/// A whitelisted MIME-type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MimeRule {
    /// Plain string prefix matched against the MIME type
    pub prefix: &'static str,
    /// Whether the server response can be displayed as-is
    pub server_previewable: bool,
}

/// Previewable MIME types, checked in order.
pub const MIME_WHITELIST: &[MimeRule] = &[
    MimeRule {
        prefix: "image/",
        server_previewable: true,
    },
    MimeRule {
        prefix: "text/",
        server_previewable: false,
    },
    MimeRule {
        prefix: "application/json",
        server_previewable: false,
    },
];

// =============================================================================
// Lookup
// =============================================================================

/// Guess the MIME type of a file from its extension.
///
/// Comma-separated data is reported as a spreadsheet
/// (`application/vnd.ms-excel`) so it is offered for download.
pub fn mime_type_for(name: &str) -> Option<&'static str> {
    match file_extension(name).to_ascii_lowercase().as_str() {
        "" => None,
        "csv" => Some("application/vnd.ms-excel"),
        _ => mime_guess::from_path(name).first_raw(),
    }
}

/// Find the first whitelist rule whose prefix the file's MIME type starts with.
pub fn matches_mime_type(name: &str) -> Option<&'static MimeRule> {
    let mime = mime_type_for(name)?;
    MIME_WHITELIST
        .iter()
        .find(|rule| mime.starts_with(rule.prefix))
}

// =============================================================================
// Constraints
// =============================================================================

/// Reason a file cannot be previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewNotice {
    /// MIME type is not whitelisted
    Unsupported {
        /// Substring after the last `.` (empty if none)
        extension: String,
    },
    /// Larger than [`PREVIEW_SIZE_LIMIT`]
    TooLarge,
}

impl fmt::Display for PreviewNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { extension } => write!(
                f,
                "{} files cannot be previewed. Please use download.",
                extension
            ),
            Self::TooLarge => write!(
                f,
                "File size is too big to be previewed (limit {}). Please use download.",
                PREVIEW_LIMIT_LABEL
            ),
        }
    }
}

/// Check whether a file may be previewed.
///
/// Returns `None` when the preview is permitted.
pub fn check_constraints(name: &str, size: u64) -> Option<PreviewNotice> {
    if matches_mime_type(name).is_none() {
        return Some(PreviewNotice::Unsupported {
            extension: file_extension(name).to_string(),
        });
    }
    if size > PREVIEW_SIZE_LIMIT {
        return Some(PreviewNotice::TooLarge);
    }
    None
}
