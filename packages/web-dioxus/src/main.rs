//! Birthday party RSVP - Dioxus web application
//!
//! Single-page invite: the guest confirms attendance and the submission
//! is forwarded to an external webhook.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod pages;
mod storage;

fn main() {
    // Initialize logging (console-backed on wasm)
    dioxus::logger::initialize_default();

    dioxus::launch(app::App);
}
