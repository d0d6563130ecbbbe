//! # aura-web
//!
//! Leptos + WASM browser client for the AURA virtual trucking company.
//!
//! This crate contains pages, components, session and view state, and the
//! typed REST client for the `/api` backend. Sign-in is delegated to an
//! external identity provider; the client exchanges the one-time token it
//! returns for a cookie session.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::load();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    log::info!("aura-web starting; api at {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
