use dioxus::prelude::*;

#[component]
pub fn AboutUsPage() -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold", "About Us" }
        p { "Ticketify sells tickets for movies and live shows." }
    }
}

#[component]
pub fn ContactUsPage() -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold", "Contact Us" }
        p { "Questions about a booking? Reach out and we'll help." }
    }
}
