//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_content`], [`fetch_json`] - Credentialed network fetching
//! - [`dom`] - Window, document and URL hash access
//! - [`format`] - Size and date display
//! - [`log`] - Browser console logging

pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::{fetch_content, fetch_json};
