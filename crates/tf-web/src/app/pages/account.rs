use dioxus::prelude::*;

#[component]
pub fn AccountPage() -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold", "Account" }
        p { "Your bookings and profile settings." }
    }
}
