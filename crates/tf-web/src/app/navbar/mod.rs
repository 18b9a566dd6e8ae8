//! Navigation bar state: session tracking and the account dropdown.
//!
//! [`Navbar`] is plain Rust over `Rc<RefCell<_>>` so it can be driven without
//! a renderer; `components::NavBar` mirrors it into Dioxus signals.

pub mod click_outside;
pub mod disclosure;
pub mod session;
pub mod view;
pub mod watcher;

use std::{cell::RefCell, rc::Rc};

pub use click_outside::{ClickBus, ClickSource, DocumentClick};
pub use disclosure::{ClickOutside, DisclosureController, DisclosurePanel};
pub use session::Session;
pub use view::{NavLinkView, NavbarView};
pub use watcher::{SessionWatcher, Spawner};

use crate::app::{
    auth::{AuthProvider, ProfileStore}, reactivity::Observable, routes::{RouteNavigator, Routes}
};

/// Entries in the account dropdown that lead somewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Account,
    Help,
}

impl MenuEntry {
    pub fn route(self) -> Routes {
        match self {
            MenuEntry::Account => Routes::AccountPage {},
            MenuEntry::Help => Routes::ContactUsPage {},
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Account => "Account",
            MenuEntry::Help => "Help",
        }
    }
}

/// One mounted navigation bar.
pub struct Navbar {
    auth: Rc<dyn AuthProvider>,
    navigator: Rc<dyn RouteNavigator>,
    session: Observable<Session>,
    disclosure: DisclosureController,
    watcher: RefCell<Option<SessionWatcher>>,
    click_outside: RefCell<Option<ClickOutside>>,
}

impl Navbar {
    /// Subscribe to the auth provider. The subscription lasts until
    /// [`Navbar::unmount`] or drop.
    pub fn mount(
        auth: Rc<dyn AuthProvider>,
        profiles: Rc<dyn ProfileStore>,
        navigator: Rc<dyn RouteNavigator>,
        spawner: Spawner,
    ) -> Self {
        let session = Observable::new(Session::default());
        let watcher = SessionWatcher::mount(auth.as_ref(), profiles, session.clone(), spawner);

        Self {
            auth,
            navigator,
            session,
            disclosure: DisclosureController::new(),
            watcher: RefCell::new(Some(watcher)),
            click_outside: RefCell::new(None),
        }
    }

    pub fn session(&self) -> &Observable<Session> {
        &self.session
    }

    pub fn disclosure(&self) -> &DisclosureController {
        &self.disclosure
    }

    pub fn view(&self, current: &Routes) -> NavbarView {
        self.session.with(|session| NavbarView::derive(session, current))
    }

    pub fn is_mounted(&self) -> bool {
        self.watcher.borrow().is_some()
    }

    /// Attach the outside-click observer. Only the first call per mount
    /// registers; later calls return `false`.
    pub fn attach_clicks(&self, source: &dyn ClickSource) -> bool {
        let mut slot = self.click_outside.borrow_mut();
        if slot.is_some() || !self.is_mounted() {
            return false;
        }
        *slot = Some(self.disclosure.watch_clicks(source));
        true
    }

    /// Remove the outside-click observer (the dropdown element went away).
    pub fn detach_clicks(&self) {
        self.click_outside.borrow_mut().take();
    }

    /// A menu entry was clicked. The entry's link performs the navigation;
    /// the dropdown only needs to close.
    pub fn follow_menu_entry(&self, entry: MenuEntry) -> Routes {
        self.disclosure.close();
        tracing::debug!(entry = entry.label(), "menu entry selected");
        entry.route()
    }

    pub fn open_notifications(&self) {
        self.navigator.navigate(Routes::NotificationsPage {});
    }

    /// Sign out through the provider, then drop the session flags, close the
    /// dropdown and redirect to the login page.
    ///
    /// Local state only moves once the provider confirms. On failure nothing
    /// changes and the user still looks signed in.
    pub async fn sign_out(&self) -> bool {
        if let Err(err) = self.auth.sign_out().await {
            tracing::error!(error = %err, "logout failed");
            return false;
        }

        match self.watcher.borrow().as_ref() {
            Some(watcher) => watcher.log_out(),
            None => {
                self.session.update(Session::log_out);
            }
        }
        self.disclosure.close();
        self.navigator.navigate(Routes::LoginPage {});
        true
    }

    /// Release the auth listener and the outside-click observer.
    pub fn unmount(&self) {
        self.click_outside.borrow_mut().take();
        if self.watcher.borrow_mut().take().is_some() {
            tracing::debug!("navbar unmounted");
        }
    }
}
