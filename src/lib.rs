//! # privyde-web
//!
//! Leptos + WASM frontend for the Privyde chauffeur platform: marketing
//! pages, login/registration, the partner onboarding step, and the admin
//! dashboard shell.
//!
//! This crate contains pages, components, application state, the REST
//! client for the booking backend, and the session store that gates
//! role-restricted routes. The backend API itself is an external service
//! consumed over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client-side app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
