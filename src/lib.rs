//! # rover-assistant
//!
//! Leptos + WASM floating chat widget for the Deakin Rover site.
//! Replaces the React `ChatWidget` component with a Rust-native UI layer.
//!
//! The widget renders a floating toggle bubble and, when open, a
//! conversation panel. Each accepted submission makes one HTTP round trip
//! to the assistant backend and appends the reply (or a fixed fallback
//! message) to the conversation.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
