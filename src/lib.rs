// src/lib.rs

//! Reon.ai - AI marketing automation landing page and dashboard
//!
//! All business data is static mock data. The only stateful piece is the
//! client-side [`session::SessionManager`], which persists a user/workspace
//! snapshot to a key-value store and drives the dashboard route guard.

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::result_large_err)]

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::error_1(&format!("Failed to set up tracing: {:?}", e).into());
    }

    tracing::info!("Starting Reon.ai v{}", VERSION);
    dioxus::launch(ui::App);
}

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod guard;
pub mod model;
pub mod platform;
pub mod session;
pub mod ui;
pub mod utils;

// Native-only modules
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use error::{Error, ErrorKind, Result, ResultExt};
pub use session::{SessionManager, SessionSnapshot, SessionState};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
