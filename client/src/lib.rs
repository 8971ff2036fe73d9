//! # argent-client
//!
//! Leptos + WASM frontend for Argent Bank.
//!
//! Session, persistence, and guard logic live in the `argent` core crate; this
//! crate supplies the browser pieces (a `fetch` gateway and Web Storage
//! backends) and renders the home, sign-in, and profile views over them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
