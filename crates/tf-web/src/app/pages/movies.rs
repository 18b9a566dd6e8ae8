use dioxus::prelude::*;

#[component]
pub fn AddMoviePage() -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold", "List Your Show" }
        p { "Listing management is available to administrators." }
    }
}
