use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::AuthUser;

fn session(user: &str) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at: 10,
        user: AuthUser { id: user.to_owned(), email: None },
    }
}

#[test]
fn subscribers_receive_emitted_events_until_unsubscribed() {
    let events = SessionEvents::default();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let id = events.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    events.emit(&SessionEvent::SignedIn(session("u-1")));
    events.emit(&SessionEvent::SignedOut);
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    assert!(events.unsubscribe(id));
    assert!(!events.unsubscribe(id));
    events.emit(&SessionEvent::SignedOut);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn clones_share_one_registry() {
    let events = SessionEvents::default();
    let other = events.clone();
    let _ = other.subscribe(|_| {});
    assert_eq!(events.listener_count(), 1);
}

#[test]
fn listener_may_unsubscribe_itself_during_emit() {
    let events = SessionEvents::default();
    let handle = events.clone();
    let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));
    let slot_in = Arc::clone(&slot);
    let id = events.subscribe(move |_| {
        if let Some(id) = *slot_in.lock().unwrap() {
            handle.unsubscribe(id);
        }
    });
    *slot.lock().unwrap() = Some(id);

    events.emit(&SessionEvent::SignedOut);
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn event_session_accessor() {
    assert_eq!(SessionEvent::SignedIn(session("u-1")).session().map(|s| s.user.id.as_str()), Some("u-1"));
    assert_eq!(SessionEvent::SignedOut.session(), None);
}
