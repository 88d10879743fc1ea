//! SENSE Data Market Dashboard
//!
//! Web dashboard for the SENSE data market built with Leptos (WASM).
//!
//! # Features
//!
//! - Upload form for sensory/emotion records
//! - Latest-six and top-five record views
//! - Aggregate emotion chart per sense category
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It talks to the record backend through the gateway's
//! `/api/records` endpoint and keeps no state beyond the fetched array.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
