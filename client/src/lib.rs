//! # qa-client
//!
//! Leptos + WASM frontend for the question/answer widget: a form that posts
//! a question to the answer endpoint, renders the markdown reply as a chat
//! bubble, and derives an iframe snippet for embedding the widget elsewhere.
//!
//! Built with `hydrate` for the browser bundle and with `ssr` when linked into
//! the host server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
