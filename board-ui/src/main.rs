//! Activity Board (browser)
//!
//! Activity signup page built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with live participant rosters
//! - Sign up from a card (email prompt) or from the signup form
//! - Unregister participants after a confirmation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All behavior lives in the shared `ActivityBoard` controller;
//! this crate only supplies the gloo-net transport, the `window` dialogs and
//! a signal-backed render surface.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
