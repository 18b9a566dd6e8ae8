use dioxus::prelude::*;

use crate::app::{
    routes::AppRouter, services::{AppServices, embedded_config}
};

/// Root shell: provides the shared services and config, then hands off to the router.
#[component]
pub fn AppRoot() -> Element {
    use_context_provider(AppServices::from_embedded);
    use_context_provider(embedded_config);

    rsx! {
        document::Title { "Ticketify" }
        document::Stylesheet { href: asset!("/assets/navbar.css") }
        AppRouter {}
    }
}
