//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`workspace`] - Workspace file browser and preview modal
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar showing session and API info

pub mod icons;
pub mod router;
pub mod status;
pub mod workspace;

pub use router::AppRouter;
pub use status::Status;
