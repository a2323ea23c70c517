//! Workspace file browser components.
//!
//! Components:
//! - [`WorkspaceFiles`] - Listing of one workflow's workspace
//! - [`FileTable`] - Sortable file table
//! - [`PreviewModal`] - Preview / download dialog for the activated file

mod file_table;
mod preview_modal;
mod workspace_files;

pub use file_table::FileTable;
pub use preview_modal::PreviewModal;
pub use workspace_files::WorkspaceFiles;
