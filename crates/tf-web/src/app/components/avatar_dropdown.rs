use dioxus::prelude::*;

use super::navbar::NavbarHandle;
use crate::app::navbar::MenuEntry;

#[component]
pub fn AvatarDropDown(
    navbar: NavbarHandle,
    /// Hidden (but kept mounted) while signed out.
    visible: bool,
    open: bool,
    name: String,
    email: String,
    avatar_url: String,
) -> Element {
    // The outside-click observer follows this element's lifetime.
    {
        let navbar = navbar.clone();
        use_drop(move || navbar.detach_clicks());
    }

    let on_mounted = {
        let navbar = navbar.clone();
        move |_evt: MountedEvent| {
            #[cfg(feature = "web")]
            {
                use crate::app::navbar::click_outside::DocumentClickSource;

                if let Some(element) = _evt.data.downcast::<web_sys::Element>() {
                    navbar.attach_clicks(&DocumentClickSource::new(element.clone()));
                }
            }
            #[cfg(not(feature = "web"))]
            tracing::debug!(attached = navbar.is_mounted(), "outside-click observation needs the web renderer");
        }
    };

    // Opening is left to the native <details> toggle; just mirror it.
    let toggler = navbar.clone();
    let on_summary = move |_| toggler.disclosure().sync_native(!open);

    let signer = navbar.clone();
    let on_logout = move |_| {
        let navbar = signer.clone();
        spawn(async move {
            navbar.sign_out().await;
        });
    };

    rsx! {
        div { class: if visible { "dropdown-container" } else { "hide-div" },
            details {
                class: "dropdown right",
                open: open,
                onmounted: on_mounted,
                summary { class: "avatar", onclick: on_summary,
                    img { src: "{avatar_url}", alt: "Avatar" }
                }
                ul {
                    li {
                        p {
                            span { class: "block bold", "{name}" }
                            span { class: "block italic", "{email}" }
                        }
                    }
                    MenuLink { navbar: navbar.clone(), entry: MenuEntry::Account, icon: "account_circle" }
                    MenuLink { navbar: navbar.clone(), entry: MenuEntry::Help, icon: "help" }
                    li { class: "divider" }
                    li {
                        button { class: "logout-button", onclick: on_logout,
                            span { class: "material-symbols-outlined", "logout" }
                            " Logout"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuLink(navbar: NavbarHandle, entry: MenuEntry, icon: &'static str) -> Element {
    rsx! {
        li {
            Link {
                to: entry.route(),
                onclick: move |_| {
                    navbar.follow_menu_entry(entry);
                },
                span { class: "material-symbols-outlined", "{icon}" }
                " {entry.label()}"
            }
        }
    }
}
