//! Session-change event registry.
//!
//! DESIGN
//! ======
//! The registry is an explicitly scoped handle created by the root
//! component, not a global. Listeners subscribe on mount and unsubscribe in
//! `on_cleanup`; `emit` snapshots the listener list before invoking so a
//! listener may unsubscribe itself without deadlocking.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

impl SessionEvent {
    /// The session to persist after this event, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(s) | Self::TokenRefreshed(s) => Some(s),
            Self::SignedOut => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Cloneable handle to the app's session listeners.
#[derive(Clone, Default)]
pub struct SessionEvents {
    inner: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEvents").field("listeners", &self.listener_count()).finish()
    }
}

impl SessionEvents {
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.next_id += 1;
        let id = SubscriptionId(registry.next_id);
        registry.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = registry.listeners.len();
        registry.listeners.retain(|(lid, _)| *lid != id);
        registry.listeners.len() != before
    }

    pub fn emit(&self, event: &SessionEvent) {
        let snapshot: Vec<Listener> = {
            let registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).listeners.len()
    }
}
