//! MediTrack
//!
//! Personal medication tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Register, login and password-reset flows
//! - Medicine list with create, edit and delete
//! - Profile with avatar preference and dark mode
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It talks to the MediTrack REST backend over HTTP and
//! keeps the session in browser storage.

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
