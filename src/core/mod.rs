//! Core logic for the workspace console.
//!
//! This module provides:
//! - [`AppStore`] shared state with [`Action`] dispatch and selectors
//! - [`check_logged_in`] startup session check
//! - [`mime`] preview whitelist and constraint checks
//! - [`sort`] column sorting of the file table
//! - [`preview`] preview planning and fetched-body rendering
//! - [`api`] REST endpoint construction

pub mod api;
pub mod error;
pub mod mime;
pub mod preview;
mod session;
pub mod sort;
mod store;

pub use session::check_logged_in;
pub use store::{Action, AppStore};
