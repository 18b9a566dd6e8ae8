use dioxus::prelude::*;

use crate::{
    components::NavBar, routes::Routes
};

#[component]
pub fn Layout() -> Element {
    rsx! {
        div {
            class: "tf-layout min-h-screen flex flex-col",
            header {
                NavBar {}
            }
            main {
                class: "tf-main flex-grow p-4",
                Outlet::<Routes> {}
            }
        }
    }
}
