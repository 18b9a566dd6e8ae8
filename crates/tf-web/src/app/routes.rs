use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::{
    components::Layout, pages::{
        AboutUsPage, AccountPage, AddMoviePage, ContactUsPage, HomePage, LoginPage, NotFoundPage, NotificationsPage
    }
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Routes {
    #[layout(Layout)]
        #[route("/")]
        HomePage {},
        #[route("/AboutUs")]
        AboutUsPage {},
        #[route("/ContactUs")]
        ContactUsPage {},
        #[route("/Login")]
        LoginPage {},
        #[route("/AddMovie")]
        AddMoviePage {},
        #[route("/Account")]
        AccountPage {},
        #[route("/notifications")]
        NotificationsPage {},
        #[route("/:..route")]
        NotFoundPage { route: Vec<String> },
}

/// Imperative navigation used by the navbar (logout redirect, bell icon,
/// dropdown entries).
pub trait RouteNavigator {
    fn navigate(&self, route: Routes);
}

impl RouteNavigator for Navigator {
    fn navigate(&self, route: Routes) {
        tracing::debug!(route = %route, "navigating");
        self.push(route);
    }
}
