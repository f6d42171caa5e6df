//! # medboard
//!
//! Leptos + WASM web interface for the Medical SMM automation bot.
//! Browser-side presentational glue only: the backend API, auth, and
//! persistence live elsewhere and are reached over REST.
//!
//! This crate contains pages, components, shared state, the REST wire
//! types, and the page-behavior utilities (alert dismissal, date and
//! number formatting, loading toggles, clipboard copy, debouncing).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts over the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Medical SMM Bot - Web Interface Loaded");
    leptos::mount::hydrate_body(crate::app::App);
}
