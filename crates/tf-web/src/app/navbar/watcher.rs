use std::{cell::Cell, rc::Rc};

use futures::future::LocalBoxFuture;
use tf_types::Identity;

use super::session::Session;
use crate::app::{
    auth::{AuthProvider, ProfileStore}, reactivity::{Observable, Subscription}
};

/// Runs a future on the UI event loop without blocking the caller.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Keeps [`Session`] in step with the auth provider.
///
/// Holds exactly one auth listener for as long as it lives. Every
/// notification bumps an epoch; a profile fetch only lands if no newer
/// notification (or logout, or drop) happened while it was in flight.
pub struct SessionWatcher {
    session: Observable<Session>,
    epoch: Rc<Cell<u64>>,
    _subscription: Subscription,
}

impl SessionWatcher {
    pub fn mount(
        auth: &dyn AuthProvider,
        profiles: Rc<dyn ProfileStore>,
        session: Observable<Session>,
        spawner: Spawner,
    ) -> Self {
        let epoch = Rc::new(Cell::new(0));

        let listener = {
            let session = session.clone();
            let epoch = epoch.clone();
            Box::new(move |identity: Option<Identity>| {
                on_auth_change(identity, &session, &epoch, &profiles, &spawner);
            })
        };
        let subscription = auth.subscribe(listener);

        Self {
            session,
            epoch,
            _subscription: subscription,
        }
    }

    pub fn session(&self) -> &Observable<Session> {
        &self.session
    }

    /// Drop the logged-in flags and invalidate any profile fetch in flight.
    pub fn log_out(&self) {
        bump(&self.epoch);
        self.session.update(Session::log_out);
    }
}

impl Drop for SessionWatcher {
    fn drop(&mut self) {
        // Late fetches must not write into a torn-down navbar.
        bump(&self.epoch);
    }
}

fn bump(epoch: &Cell<u64>) -> u64 {
    let next = epoch.get().wrapping_add(1);
    epoch.set(next);
    next
}

fn on_auth_change(
    identity: Option<Identity>,
    session: &Observable<Session>,
    epoch: &Rc<Cell<u64>>,
    profiles: &Rc<dyn ProfileStore>,
    spawner: &Spawner,
) {
    let ticket = bump(epoch);

    let Some(identity) = identity else {
        tracing::debug!("auth state: no active user");
        session.update(Session::log_out);
        return;
    };

    tracing::debug!(identity = %identity, "auth state changed, fetching profile");
    let session = session.clone();
    let epoch = epoch.clone();
    let profiles = profiles.clone();
    spawner(Box::pin(async move {
        match profiles.fetch_user_details(&identity).await {
            Ok(profile) => {
                if epoch.get() != ticket {
                    tracing::debug!(identity = %identity, "discarding stale profile");
                    return;
                }
                session.update(|s| s.apply_profile(&profile));
                tracing::info!(identity = %identity, admin = profile.is_admin, "session updated");
            }
            Err(err) => {
                tracing::error!(identity = %identity, error = %err, "failed to fetch user details");
            }
        }
    }));
}
