//! Integration tests for the navigation bar's session and dropdown behaviour.
//!
//! The auth provider, profile store and navigator are replaced with in-memory
//! doubles. Spawned profile fetches are queued so tests decide when (and in
//! which order) they complete.

use std::{
    cell::{Cell, RefCell}, collections::{HashMap, VecDeque}, rc::Rc
};

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use tf_types::{Identity, UserProfile};
use tf_web::{
    app::{
        auth::{AuthListener, AuthProvider, ProfileStore}, navbar::{ClickBus, DocumentClick, MenuEntry, Navbar, Spawner}, reactivity::{Listeners, Subscription}, routes::RouteNavigator
    }, error::{AuthError, AuthResult, ProfileError, ProfileResult}, Routes
};

// ---------------------------------------------------------------------------
// Doubles
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct FakeAuth {
    listeners: Listeners<Option<Identity>>,
    fail_sign_out: Rc<Cell<bool>>,
    /// Succeed without broadcasting the signed-out identity.
    quiet_sign_out: Rc<Cell<bool>>,
    sign_out_calls: Rc<Cell<u32>>,
}

impl FakeAuth {
    fn notify(&self, identity: Option<&str>) {
        let identity = identity.map(|raw| Identity::new(raw).unwrap());
        self.listeners.emit(&identity);
    }
}

#[async_trait(?Send)]
impl AuthProvider for FakeAuth {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        self.listeners.add(move |identity| listener(identity.clone()))
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        if self.fail_sign_out.get() {
            return Err(AuthError::sign_out_failed("network down"));
        }
        if !self.quiet_sign_out.get() {
            self.listeners.emit(&None);
        }
        Ok(())
    }
}

#[derive(Default)]
struct FakeProfiles {
    records: RefCell<HashMap<String, ProfileResult<UserProfile>>>,
}

impl FakeProfiles {
    fn with(self, id: &str, record: ProfileResult<UserProfile>) -> Self {
        self.records.borrow_mut().insert(id.to_string(), record);
        self
    }
}

#[async_trait(?Send)]
impl ProfileStore for FakeProfiles {
    async fn fetch_user_details(&self, identity: &Identity) -> ProfileResult<UserProfile> {
        self.records
            .borrow()
            .get(identity.as_str())
            .cloned()
            .unwrap_or_else(|| Err(ProfileError::not_found(identity)))
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<Routes>>,
}

impl RouteNavigator for RecordingNavigator {
    fn navigate(&self, route: Routes) {
        self.visited.borrow_mut().push(route);
    }
}

#[derive(Clone, Default)]
struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<LocalBoxFuture<'static, ()>>>>,
}

impl TaskQueue {
    fn spawner(&self) -> Spawner {
        let tasks = self.tasks.clone();
        Rc::new(move |task: LocalBoxFuture<'static, ()>| tasks.borrow_mut().push_back(task))
    }

    fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    async fn run_all(&self) {
        loop {
            let next = self.tasks.borrow_mut().pop_front();
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }
}

struct Harness {
    auth: FakeAuth,
    navigator: Rc<RecordingNavigator>,
    tasks: TaskQueue,
    navbar: Navbar,
}

fn harness(profiles: FakeProfiles) -> Harness {
    let auth = FakeAuth::default();
    let navigator = Rc::new(RecordingNavigator::default());
    let tasks = TaskQueue::default();
    let navbar = Navbar::mount(
        Rc::new(auth.clone()),
        Rc::new(profiles),
        navigator.clone(),
        tasks.spawner(),
    );
    Harness {
        auth,
        navigator,
        tasks,
        navbar,
    }
}

fn ada() -> UserProfile {
    UserProfile::new("Ada", "a@x.com", true)
}

fn grace() -> UserProfile {
    UserProfile::new("Grace", "g@x.com", false)
}

const OUTSIDE: DocumentClick = DocumentClick { inside_panel: false };

// ---------------------------------------------------------------------------
// Session watcher
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_login_shows_full_logged_in_surface() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())));

    h.auth.notify(Some("u1"));
    h.tasks.run_all().await;

    let view = h.navbar.view(&Routes::HomePage {});
    assert!(view.show_account_menu);
    assert!(view.show_notifications);
    assert!(view.has_link("List Your Show"));
    assert!(!view.has_link("Login"));
    assert_eq!(view.name, "Ada");
    assert_eq!(view.email, "a@x.com");
}

#[tokio::test]
async fn non_admin_login_hides_listing_link() {
    let h = harness(FakeProfiles::default().with("u2", Ok(grace())));

    h.auth.notify(Some("u2"));
    h.tasks.run_all().await;

    let view = h.navbar.view(&Routes::HomePage {});
    assert!(!view.has_link("List Your Show"));
    assert!(!view.has_link("Login"));
    assert!(view.show_account_menu);
    assert!(view.show_notifications);
}

#[tokio::test]
async fn null_identity_always_clears_flags() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())));

    // From logged out
    h.auth.notify(None);
    assert!(!h.navbar.session().get().is_logged_in());

    // From logged in as admin
    h.auth.notify(Some("u1"));
    h.tasks.run_all().await;
    assert!(h.navbar.session().get().is_admin());

    h.auth.notify(None);
    let session = h.navbar.session().get();
    assert!(!session.is_logged_in());
    assert!(!session.is_admin());
    // Display fields are left as they were
    assert_eq!(session.name(), "Ada");
}

#[tokio::test]
async fn profile_fetch_is_deferred_until_spawned_task_runs() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())));

    h.auth.notify(Some("u1"));
    assert_eq!(h.tasks.pending(), 1);
    assert!(!h.navbar.session().get().is_logged_in());

    h.tasks.run_all().await;
    assert!(h.navbar.session().get().is_logged_in());
}

#[tokio::test]
async fn failed_fetch_keeps_previous_state() {
    let h = harness(
        FakeProfiles::default()
            .with("u1", Ok(ada()))
            .with("broken", Err(ProfileError::backend("timeout"))),
    );

    h.auth.notify(Some("u1"));
    h.tasks.run_all().await;
    let before = h.navbar.session().get();

    h.auth.notify(Some("broken"));
    h.tasks.run_all().await;
    assert_eq!(h.navbar.session().get(), before);
}

#[tokio::test]
async fn failed_fetch_from_logged_out_stays_logged_out() {
    let h = harness(FakeProfiles::default());

    h.auth.notify(Some("ghost"));
    h.tasks.run_all().await;

    let view = h.navbar.view(&Routes::HomePage {});
    assert!(view.has_link("Login"));
    assert!(!view.show_account_menu);
}

#[tokio::test]
async fn stale_fetch_after_logout_is_discarded() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())));

    h.auth.notify(Some("u1"));
    h.auth.notify(None);
    h.tasks.run_all().await;

    let session = h.navbar.session().get();
    assert!(!session.is_logged_in());
    assert!(!session.is_admin());
}

#[tokio::test]
async fn only_latest_identity_wins() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())).with("u2", Ok(grace())));

    h.auth.notify(Some("u1"));
    h.auth.notify(Some("u2"));
    h.tasks.run_all().await;

    let session = h.navbar.session().get();
    assert_eq!(session.name(), "Grace");
    assert!(!session.is_admin());
}

#[tokio::test]
async fn unmount_detaches_listener_and_drops_late_results() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())));
    assert_eq!(h.auth.listeners.len(), 1);

    h.auth.notify(Some("u1"));
    h.navbar.unmount();
    assert_eq!(h.auth.listeners.len(), 0);

    h.tasks.run_all().await;
    assert!(!h.navbar.session().get().is_logged_in());

    // Further notifications are not observed
    h.auth.notify(Some("u1"));
    assert_eq!(h.tasks.pending(), 0);
}

#[tokio::test]
async fn dropping_navbar_unsubscribes() {
    let h = harness(FakeProfiles::default());
    let auth = h.auth.clone();
    assert_eq!(auth.listeners.len(), 1);

    drop(h);
    assert_eq!(auth.listeners.len(), 0);
}

// ---------------------------------------------------------------------------
// Sign-out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sign_out_success_clears_session_closes_panel_and_redirects() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())));
    h.auth.notify(Some("u1"));
    h.tasks.run_all().await;
    h.navbar.disclosure().sync_native(true);

    assert!(h.navbar.sign_out().await);

    let session = h.navbar.session().get();
    assert!(!session.is_logged_in());
    assert!(!session.is_admin());
    assert!(!h.navbar.disclosure().is_open());
    assert_eq!(*h.navigator.visited.borrow(), vec![Routes::LoginPage {}]);
}

#[tokio::test]
async fn sign_out_failure_changes_nothing() {
    for panel_open in [true, false] {
        let h = harness(FakeProfiles::default().with("u1", Ok(ada())));
        h.auth.notify(Some("u1"));
        h.tasks.run_all().await;
        h.navbar.disclosure().sync_native(panel_open);
        h.auth.fail_sign_out.set(true);

        assert!(!h.navbar.sign_out().await);

        assert_eq!(h.auth.sign_out_calls.get(), 1);
        assert!(h.navbar.session().get().is_logged_in());
        assert!(h.navbar.session().get().is_admin());
        assert_eq!(h.navbar.disclosure().is_open(), panel_open);
        assert!(h.navigator.visited.borrow().is_empty());
    }
}

#[tokio::test]
async fn sign_out_invalidates_inflight_fetch() {
    let h = harness(FakeProfiles::default().with("u1", Ok(ada())));
    h.auth.quiet_sign_out.set(true);

    h.auth.notify(Some("u1"));
    assert!(h.navbar.sign_out().await);

    h.tasks.run_all().await;
    assert!(!h.navbar.session().get().is_logged_in());
}

// ---------------------------------------------------------------------------
// Disclosure panel
// ---------------------------------------------------------------------------

#[test]
fn outside_clicks_close_open_panel_once_attached() {
    let h = harness(FakeProfiles::default());
    let bus = ClickBus::new();

    assert!(h.navbar.attach_clicks(&bus));
    assert!(!h.navbar.attach_clicks(&bus));
    assert_eq!(bus.listener_count(), 1);

    h.navbar.disclosure().sync_native(true);
    bus.click(DocumentClick { inside_panel: true });
    assert!(h.navbar.disclosure().is_open());

    bus.click(OUTSIDE);
    assert!(!h.navbar.disclosure().is_open());

    // Closed panel: outside click is a no-op
    bus.click(OUTSIDE);
    assert!(!h.navbar.disclosure().is_open());
}

#[test]
fn click_observer_released_on_detach_and_unmount() {
    let h = harness(FakeProfiles::default());
    let bus = ClickBus::new();

    assert!(h.navbar.attach_clicks(&bus));
    h.navbar.detach_clicks();
    assert_eq!(bus.listener_count(), 0);

    // Re-attach for a fresh dropdown element
    assert!(h.navbar.attach_clicks(&bus));
    h.navbar.unmount();
    assert_eq!(bus.listener_count(), 0);

    // Nothing attaches after unmount
    assert!(!h.navbar.attach_clicks(&bus));
}

#[test]
fn menu_entries_close_panel_and_point_at_their_pages() {
    let h = harness(FakeProfiles::default());

    h.navbar.disclosure().sync_native(true);
    assert_eq!(h.navbar.follow_menu_entry(MenuEntry::Account), Routes::AccountPage {});
    assert!(!h.navbar.disclosure().is_open());

    h.navbar.disclosure().sync_native(true);
    assert_eq!(h.navbar.follow_menu_entry(MenuEntry::Help), Routes::ContactUsPage {});
    assert!(!h.navbar.disclosure().is_open());

    // Closed panel stays closed
    h.navbar.follow_menu_entry(MenuEntry::Help);
    assert!(!h.navbar.disclosure().is_open());

    // The links navigate on their own
    assert!(h.navigator.visited.borrow().is_empty());
}

#[test]
fn bell_navigates_to_notifications() {
    let h = harness(FakeProfiles::default());
    h.navbar.open_notifications();
    assert_eq!(*h.navigator.visited.borrow(), vec![Routes::NotificationsPage {}]);
}
