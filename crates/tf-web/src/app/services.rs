use std::rc::Rc;

use tf_types::NavbarConfig;

use crate::app::auth::{AuthProvider, LocalAuthProvider, ProfileStore, StaticProfileStore};

const EMBEDDED_PROFILES: &str = include_str!("../../assets/profiles.json");
const EMBEDDED_CONFIG: &str = include_str!("../../assets/navbar.json");

/// Collaborators shared through Dioxus context.
#[derive(Clone)]
pub struct AppServices {
    pub auth: LocalAuthProvider,
    pub profiles: StaticProfileStore,
}

impl AppServices {
    pub fn new(auth: LocalAuthProvider, profiles: StaticProfileStore) -> Self {
        Self { auth, profiles }
    }

    /// Services backed by the profile records bundled with the app.
    pub fn from_embedded() -> Self {
        let profiles = StaticProfileStore::from_json(EMBEDDED_PROFILES).unwrap_or_else(|err| {
            tracing::error!(error = %err, "bundled profiles unreadable, starting with none");
            StaticProfileStore::new()
        });
        Self::new(LocalAuthProvider::new(), profiles)
    }

    pub fn auth_provider(&self) -> Rc<dyn AuthProvider> {
        Rc::new(self.auth.clone())
    }

    pub fn profile_store(&self) -> Rc<dyn ProfileStore> {
        Rc::new(self.profiles.clone())
    }
}

/// Navbar config bundled with the app, falling back to defaults.
pub fn embedded_config() -> NavbarConfig {
    NavbarConfig::from_json(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "bundled navbar config unreadable, using defaults");
        NavbarConfig::default()
    })
}
