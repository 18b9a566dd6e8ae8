use dioxus::prelude::*;

#[component]
pub fn NotificationsPage() -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold", "Notifications" }
        p { "You're all caught up." }
    }
}
