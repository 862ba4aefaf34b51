//! # client
//!
//! Leptos + WASM frontend for Circula, the campus item-exchange marketplace.
//!
//! This crate contains pages, components, application state, and the network
//! layer that talks to the hosted backend (auth, tables, storage, rpc). All
//! persistence and access control live in that backend; the crate only
//! fetches, derives, and renders.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("circula client hydrating");
    leptos::mount::hydrate_body(app::App);
}
