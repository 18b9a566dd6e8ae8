//! Single-threaded observable state with scoped subscriptions.
//!
//! UI state that lives outside Dioxus signals (session flags, dropdown state)
//! is held in `Rc<RefCell<_>>` cells and observed through [`Listeners`].
//! Every registration hands back a [`Subscription`] that removes the listener
//! when dropped, so listener lifetimes follow the owning component.

use std::{
    cell::RefCell, rc::{Rc, Weak}
};

type Callback<A> = Rc<dyn Fn(&A)>;

struct ListenerSet<A> {
    next_id: u64,
    entries: Vec<(u64, Callback<A>)>,
}

/// Broadcast list of callbacks.
pub struct Listeners<A> {
    inner: Rc<RefCell<ListenerSet<A>>>,
}

impl<A> Clone for Listeners<A> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<A: 'static> Default for Listeners<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> Listeners<A> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerSet {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a callback; it stays registered until the returned guard drops.
    pub fn add<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&A) + 'static,
    {
        let callback: Callback<A> = Rc::new(callback);
        let id = {
            let mut set = self.inner.borrow_mut();
            let id = set.next_id;
            set.next_id += 1;
            set.entries.push((id, callback));
            id
        };

        let weak: Weak<RefCell<ListenerSet<A>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Invoke every registered callback.
    ///
    /// Callbacks run against a snapshot, so they may subscribe or unsubscribe
    /// re-entrantly without tripping the `RefCell`.
    pub fn emit(&self, value: &A) {
        let snapshot: Vec<Callback<A>> = self.inner.borrow().entries.iter().map(|(_, cb)| cb.clone()).collect();
        for callback in snapshot {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard returned by every registration. Dropping it unregisters.
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A guard with nothing to release (registration was skipped or failed).
    pub fn empty() -> Self {
        Self { cancel: None }
    }

    /// Release the registration now instead of waiting for drop.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

/// Shared value that notifies subscribers when it actually changes.
pub struct Observable<T> {
    value: Rc<RefCell<T>>,
    listeners: Listeners<T>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Listeners::new(),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.value.borrow())
    }

    /// Mutate in place. Subscribers are only notified when the value differs
    /// afterwards; returns whether it did.
    pub fn update(&self, updater: impl FnOnce(&mut T)) -> bool {
        let changed = {
            let mut value = self.value.borrow_mut();
            let before = value.clone();
            updater(&mut value);
            *value != before
        };

        if changed {
            let snapshot = self.get();
            self.listeners.emit(&snapshot);
        }
        changed
    }

    pub fn set(&self, new_value: T) -> bool {
        self.update(|value| *value = new_value)
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.listeners.add(callback)
    }
}
