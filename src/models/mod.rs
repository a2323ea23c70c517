//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileEntry`], [`FileList`], [`Modified`] - Workspace listing
//! - [`PreviewState`], [`ModalContent`] - Preview modal state
//! - [`SessionState`] - Login session
//! - [`AppRoute`] - Hash-based navigation

mod preview;
mod route;
mod session;
mod workspace;

pub use preview::{ModalContent, PreviewState};
pub use route::AppRoute;
pub use session::{CurrentUser, SessionState};
#[cfg(test)]
pub use workspace::Modified;
pub use workspace::{FileEntry, FileList, file_extension};
