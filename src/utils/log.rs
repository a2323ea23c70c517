//! Console logging.
//!
//! Thin wrappers over `web_sys::console`. Messages are prefixed with the
//! application name so they can be filtered in the browser devtools.
//! Off `wasm32` these are no-ops.

#[cfg(target_arch = "wasm32")]
use crate::config::APP_NAME;

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("[{}] {}", APP_NAME, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("[{}] {}", APP_NAME, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("[{}] {}", APP_NAME, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
