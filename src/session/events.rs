//! The "auth changed" notification channel.
//!
//! Delivery is synchronous, in subscription order, within the emitting call.
//! The notification has no payload; listeners read whatever they need back
//! from the session store. In the browser every emit is also dispatched on
//! `window` as a `CustomEvent` named [`AUTH_CHANGED_EVENT`], for listeners
//! outside the Rust code.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const AUTH_CHANGED_EVENT: &str = "auth:changed";

/// Handle returned by [`AuthEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
pub struct AuthEvents {
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_id: Cell<u64>,
}

impl AuthEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Notify every listener registered when the emit starts. Listeners may
    /// subscribe or unsubscribe while being notified; that takes effect from
    /// the next emit.
    pub fn emit(&self) {
        let snapshot: Vec<Listener> = self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in snapshot {
            listener();
        }
        dispatch_window_event();
    }
}

#[cfg(feature = "csr")]
fn dispatch_window_event() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match web_sys::CustomEvent::new(AUTH_CHANGED_EVENT) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(err) => log::warn!("session: failed to build {AUTH_CHANGED_EVENT} event: {err:?}"),
    }
}

#[cfg(not(feature = "csr"))]
fn dispatch_window_event() {}
