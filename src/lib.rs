//! # auction-shell
//!
//! Leptos + WASM single-page shell for the auction house client.
//!
//! The crate's core is two stateful pieces: the client-side [`router`], which
//! maps URL paths to views and follows browser history, and the persisted
//! [`session`] store, which owns the authentication state and broadcasts a
//! change notification on every mutation. Pages and the navigation bar are
//! thin Leptos views driven by those two.
//!
//! Browser bindings live behind the `csr` feature; without it every browser
//! seam has an inert fallback so the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    app::start();
}
