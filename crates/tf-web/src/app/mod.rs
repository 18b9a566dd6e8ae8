pub mod auth;
pub mod components;
pub mod logging;
pub mod navbar;
pub mod pages;
pub mod reactivity;
pub mod routes;
pub mod services;
