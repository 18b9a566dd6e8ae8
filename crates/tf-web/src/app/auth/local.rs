//! In-memory auth provider and profile store used when the app runs without
//! an external identity backend.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use async_trait::async_trait;
use tf_types::{Identity, UserProfile};

use super::provider::{AuthListener, AuthProvider, ProfileStore};
use crate::{
    app::reactivity::{Listeners, Subscription}, error::{AuthResult, ProfileError, ProfileResult}
};

#[derive(Clone, Default)]
pub struct LocalAuthProvider {
    current: Rc<RefCell<Option<Identity>>>,
    listeners: Listeners<Option<Identity>>,
}

impl LocalAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    pub fn sign_in(&self, identity: Identity) {
        tracing::info!(identity = %identity, "signed in");
        self.replace(Some(identity));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn replace(&self, identity: Option<Identity>) {
        *self.current.borrow_mut() = identity.clone();
        self.listeners.emit(&identity);
    }
}

#[async_trait(?Send)]
impl AuthProvider for LocalAuthProvider {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        let listener: Rc<dyn Fn(Option<Identity>)> = Rc::from(listener);
        let subscription = {
            let listener = listener.clone();
            self.listeners.add(move |identity| listener(identity.clone()))
        };
        listener(self.current());
        subscription
    }

    async fn sign_out(&self) -> AuthResult<()> {
        if let Some(identity) = self.current() {
            tracing::info!(identity = %identity, "signed out");
        }
        self.replace(None);
        Ok(())
    }
}

/// Profile records keyed by identity.
#[derive(Clone, Default)]
pub struct StaticProfileStore {
    profiles: Rc<RefCell<HashMap<Identity, UserProfile>>>,
}

impl StaticProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load records from a JSON object of `identity -> profile`.
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        let profiles: HashMap<Identity, UserProfile> = serde_json::from_str(json)?;
        Ok(Self {
            profiles: Rc::new(RefCell::new(profiles)),
        })
    }

    pub fn insert(&self, identity: Identity, profile: UserProfile) {
        self.profiles.borrow_mut().insert(identity, profile);
    }

    pub fn len(&self) -> usize {
        self.profiles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait(?Send)]
impl ProfileStore for StaticProfileStore {
    async fn fetch_user_details(&self, identity: &Identity) -> ProfileResult<UserProfile> {
        self.profiles
            .borrow()
            .get(identity)
            .cloned()
            .ok_or_else(|| ProfileError::not_found(identity))
    }
}
