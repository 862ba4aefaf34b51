use super::*;
use crate::net::types::{AuthUser, Session};

fn session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at: 10_000,
        user: AuthUser { id: "u1".to_owned(), email: Some("ana@ufrn.test".to_owned()) },
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState { session: None, profile: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState { session: Some(session()), profile: None, loading: false };
    assert!(!should_redirect_unauth(&state));
}
