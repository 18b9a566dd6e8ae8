use dioxus::prelude::*;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "text-3xl font-bold", "Now Showing" }
            p { "Pick a show and book your seats." }
        }
    }
}
