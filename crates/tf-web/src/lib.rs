//! Ticketify web front-end.
//!
//! This crate hosts the Dioxus-based UI: the top navigation bar with its
//! session tracking and account dropdown, plus the pages it links to.

pub mod app;
pub mod app_root;
pub mod error;

pub use app::{components, navbar, pages, routes};
pub use routes::Routes;
