use std::{ops::Deref, rc::Rc};

use dioxus::{core::spawn_forever, prelude::*};
use futures::future::LocalBoxFuture;
use tf_types::NavbarConfig;

use crate::{
    app::{
        navbar::{Navbar, NavbarView, Session, Spawner}, services::AppServices
    }, components::{AvatarDropDown, BellIcon}, routes::Routes
};

/// Shared handle to the mounted [`Navbar`], comparable by identity so it can
/// be passed as a prop.
#[derive(Clone)]
pub struct NavbarHandle(Rc<Navbar>);

impl PartialEq for NavbarHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for NavbarHandle {
    type Target = Navbar;

    fn deref(&self) -> &Navbar {
        &self.0
    }
}

/// Spawner for profile fetches.
///
/// Auth notifications fire from whichever scope triggered them (the login
/// form, which unmounts right after signing in), so fetches run on the root
/// scope instead. Results that arrive after the navbar is gone are dropped by
/// the watcher's epoch check.
pub fn ui_spawner() -> Spawner {
    Rc::new(|task: LocalBoxFuture<'static, ()>| {
        spawn_forever(task);
    })
}

#[component]
pub fn NavBar() -> Element {
    let config = use_context::<NavbarConfig>();
    let services = use_context::<AppServices>();
    let navigator = use_navigator();
    let current = use_route::<Routes>();

    let navbar = use_hook(|| {
        NavbarHandle(Rc::new(Navbar::mount(
            services.auth_provider(),
            services.profile_store(),
            Rc::new(navigator),
            ui_spawner(),
        )))
    });

    let session = use_signal(|| navbar.session().get());
    let panel_open = use_signal(|| navbar.disclosure().is_open());

    // Mirror controller state into signals so the bar re-renders.
    use_hook(|| {
        let on_session = navbar.session().subscribe(move |value: &Session| {
            let mut session = session;
            session.set(value.clone());
        });
        let on_panel = navbar.disclosure().panel().subscribe(move |panel| {
            let mut panel_open = panel_open;
            panel_open.set(panel.open);
        });
        Rc::new((on_session, on_panel))
    });

    {
        let navbar = navbar.clone();
        use_drop(move || navbar.unmount());
    }

    let view = NavbarView::derive(&session.read(), &current);
    let bell = navbar.clone();

    rsx! {
        nav { class: "nav",
            a { class: "logo", href: "{config.brand_href}", "{config.brand}" }

            ul { class: "nav-links",
                for link in view.links.iter().cloned() {
                    li { key: "{link.label}",
                        Link { to: link.route.clone(), class: link.class().to_string(), "{link.label}" }
                    }
                }
            }

            AvatarDropDown {
                navbar: navbar.clone(),
                visible: view.show_account_menu,
                open: panel_open(),
                name: view.name.clone(),
                email: view.email.clone(),
                avatar_url: config.avatar_url.clone(),
            }

            if view.show_notifications {
                span {
                    class: "notification-icon",
                    title: "Notifications",
                    onclick: move |_| bell.open_notifications(),
                    BellIcon {}
                }
            }
        }
    }
}
