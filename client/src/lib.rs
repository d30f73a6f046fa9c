//! # client
//!
//! Leptos + WASM frontend for the storefront.
//!
//! This crate contains the pages (catalog, cart, checkout), the components
//! that render cart state, the product catalog, and the bridge that binds the
//! `cart` crate's store to the browser's `localStorage`. It is server-rendered
//! by the root `storefront` host and hydrated in the browser.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
