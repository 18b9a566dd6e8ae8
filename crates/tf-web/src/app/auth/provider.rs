use async_trait::async_trait;
use tf_types::{Identity, UserProfile};

use crate::{
    app::reactivity::Subscription, error::{AuthResult, ProfileResult}
};

/// Callback invoked with the current identity (`None` when signed out).
pub type AuthListener = Box<dyn Fn(Option<Identity>)>;

/// External authentication service.
///
/// Implementations deliver the current identity to a new listener right away
/// and then again on every change, and stop as soon as the returned
/// [`Subscription`] is dropped.
#[async_trait(?Send)]
pub trait AuthProvider {
    fn subscribe(&self, listener: AuthListener) -> Subscription;

    async fn sign_out(&self) -> AuthResult<()>;
}

/// External store holding display data for an identity.
#[async_trait(?Send)]
pub trait ProfileStore {
    async fn fetch_user_details(&self, identity: &Identity) -> ProfileResult<UserProfile>;
}
