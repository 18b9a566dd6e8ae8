//! Shared type definitions for Ticketify
//!
//! Lightweight types shared between the web front-end and anything that feeds
//! it user data (auth identities, profile records, navbar configuration).

pub mod auth;
pub mod config;

pub use auth::{Identity, UserProfile};
pub use config::NavbarConfig;
