//! # cipherchat
//!
//! Leptos + WASM chat client. Messages are encrypted in the browser with a
//! user-chosen cipher method and key (see the `ciphers` crate) before they
//! are posted to the chat backend.
//!
//! This crate contains pages, components, application state, the async
//! thunks that talk to the backend, and the REST client. The `server/` crate
//! hosts it with SSR.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
