// src/ui/mod.rs - Dioxus application: routing, session context, layout and pages

pub use app::App;

pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod router;
pub mod state;

pub use router::Route;
pub use state::{use_session, use_snapshot, SessionContext, SessionProvider};
