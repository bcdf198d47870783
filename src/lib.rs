//! # rentit-client
//!
//! Leptos + WASM frontend for the RentIt property-rental marketplace.
//!
//! The crate is built around the session store (`services::session`) and the
//! route guard (`util::auth`). The REST client and typed resource calls live
//! in `net`, pages and components consume the session through the
//! `app::SessionContext` handle provided at the application root.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {error}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
