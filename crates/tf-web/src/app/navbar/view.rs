use super::session::Session;
use crate::app::routes::Routes;

#[derive(Clone, Debug, PartialEq)]
pub struct NavLinkView {
    pub label: &'static str,
    pub route: Routes,
    pub active: bool,
}

impl NavLinkView {
    pub fn class(&self) -> &'static str {
        if self.active { "active-link" } else { "inactive-link" }
    }
}

/// Everything the navbar renders, derived from the session and current route.
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarView {
    pub links: Vec<NavLinkView>,
    /// Avatar trigger plus account dropdown.
    pub show_account_menu: bool,
    pub show_notifications: bool,
    pub name: String,
    pub email: String,
}

impl NavbarView {
    pub fn derive(session: &Session, current: &Routes) -> Self {
        let mut entries = vec![
            ("Home", Routes::HomePage {}),
            ("About Us", Routes::AboutUsPage {}),
            ("Contact Us", Routes::ContactUsPage {}),
        ];
        if !session.is_logged_in() {
            entries.push(("Login", Routes::LoginPage {}));
        }
        if session.is_admin() {
            entries.push(("List Your Show", Routes::AddMoviePage {}));
        }

        let links = entries
            .into_iter()
            .map(|(label, route)| NavLinkView {
                label,
                active: &route == current,
                route,
            })
            .collect();

        Self {
            links,
            show_account_menu: session.is_logged_in(),
            show_notifications: session.is_logged_in(),
            name: session.name().to_string(),
            email: session.email().to_string(),
        }
    }

    pub fn has_link(&self, label: &str) -> bool {
        self.links.iter().any(|link| link.label == label)
    }
}

#[cfg(test)]
mod tests {
    use tf_types::UserProfile;

    use super::*;

    fn logged_in(admin: bool) -> Session {
        let mut session = Session::default();
        session.apply_profile(&UserProfile::new("Ada", "a@x.com", admin));
        session
    }

    #[test]
    fn logged_out_surface() {
        let view = NavbarView::derive(&Session::default(), &Routes::HomePage {});
        assert!(view.has_link("Login"));
        assert!(!view.has_link("List Your Show"));
        assert!(!view.show_account_menu);
        assert!(!view.show_notifications);
    }

    #[test]
    fn admin_surface() {
        let view = NavbarView::derive(&logged_in(true), &Routes::HomePage {});
        let labels: Vec<_> = view.links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "About Us", "Contact Us", "List Your Show"]);
        assert!(view.show_account_menu);
        assert!(view.show_notifications);
        assert_eq!(view.name, "Ada");
        assert_eq!(view.email, "a@x.com");
    }

    #[test]
    fn non_admin_surface() {
        let view = NavbarView::derive(&logged_in(false), &Routes::HomePage {});
        assert!(!view.has_link("List Your Show"));
        assert!(!view.has_link("Login"));
        assert!(view.show_account_menu);
        assert!(view.show_notifications);
    }

    #[test]
    fn active_link_follows_route() {
        let view = NavbarView::derive(&Session::default(), &Routes::ContactUsPage {});
        for link in &view.links {
            let expected = if link.label == "Contact Us" { "active-link" } else { "inactive-link" };
            assert_eq!(link.class(), expected, "{}", link.label);
        }

        let view = NavbarView::derive(&Session::default(), &Routes::AccountPage {});
        assert!(view.links.iter().all(|l| !l.active));
    }
}
