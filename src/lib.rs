//! # goalpost
//!
//! Leptos + WASM client for a single-page "year goals" site. The page
//! renders from an in-memory model and persists goal completion and the
//! light/dark theme preference in browser `localStorage`, with
//! frame-coalesced scroll visuals layered on top.
//!
//! The logic core (`state`, `store`, `util::frame`) is free of browser
//! types and tests natively; everything browser-only sits behind the
//! `web` cargo feature.

pub mod app;
pub mod components;
pub mod effects;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// mount the page onto `<body>`.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
