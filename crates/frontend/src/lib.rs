//! PapiFast manager single-page app.

pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Wasm entry point: console logging, panic hook, then the app.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("PapiFast frontend starting");
    leptos::mount::mount_to_body(app::App);
}
