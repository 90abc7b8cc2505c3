//! # sock-shop
//!
//! Leptos + WASM product widget: a product card with color variants,
//! shipping/details tabs, a shopping cart, and a review form whose
//! submissions reach the review list through a synchronous event bus.
//!
//! Behavior lives in plain state types (`state`) and the bus (`util`) so it
//! can be tested without a browser; `components` wires it to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
