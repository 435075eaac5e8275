//! # focusboard-client
//!
//! Leptos + WASM browser client for FocusBoard: marketing page, sign-in /
//! sign-up flow, and a protected dashboard.
//!
//! The interesting part is the authentication core: the credential form
//! state machine (`state`), the session store and route guard (`session`),
//! and the identity-service calls (`net`). Pages are thin views over that
//! core and own no business logic of their own.

pub mod app;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point: set up panic reporting and console logging, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
