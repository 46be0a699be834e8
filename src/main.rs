//! denViews Dashboard
//!
//! Browser dashboard for the denViews page-view analytics API, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Folder hierarchy browsing with per-page view/hit counters
//! - Single-page statistics lookup via query parameters
//! - Auto-generated settings and first-run setup forms
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the denViews API over plain HTTP GET/POST; all
//! navigation state lives in URL query parameters.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
