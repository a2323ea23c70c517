mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use any_spawner::Executor;
use app::App;
use leptos::prelude::*;

use crate::config::MOUNT_ELEMENT_ID;
use crate::core::{AppStore, check_logged_in};
use crate::utils::{dom, log};

fn main() {
    console_error_panic_hook::set_once();
    // spawn_local panics until an executor is installed
    let _ = Executor::init_wasm_bindgen();

    let store = AppStore::new(config::api_base());

    // Fire-and-forget; the result lands in the store when it arrives
    check_logged_in(store);

    let root = match dom::mount_element(MOUNT_ELEMENT_ID) {
        Ok(root) => root,
        Err(e) => {
            log::error(&e.to_string());
            panic!("{}", e);
        }
    };

    log::info(&format!("mounting into #{}", MOUNT_ELEMENT_ID));
    mount_to(root, move || view! { <App store=store /> }).forget();
}
