//! Footfall Dashboard
//!
//! Retail visitor analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Store and date-range filtered visitor metrics
//! - Canvas chart visualizations (visits per day, gender split, age brackets)
//! - Simulated assistant chat panel
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches visitor records over HTTP and aggregates them in
//! the browser; there is no server component in this repository.

use leptos::*;

mod analytics;
mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route `log` macros to the browser console
    let _ = console_log::init_with_level(log::Level::Debug);

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
