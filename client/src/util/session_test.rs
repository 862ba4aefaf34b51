use super::*;
use crate::net::types::AuthUser;

fn session(expires_at: i64) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at,
        user: AuthUser { id: "u-1".to_owned(), email: None },
    }
}

#[test]
fn nothing_stored_settles_signed_out() {
    assert_eq!(restore_action(None, 1_000), RestoreAction::SignedOut);
}

#[test]
fn valid_session_is_used() {
    assert_eq!(restore_action(Some(session(5_000)), 1_000), RestoreAction::Use(session(5_000)));
}

#[test]
fn expired_or_nearly_expired_session_is_refreshed() {
    assert_eq!(restore_action(Some(session(900)), 1_000), RestoreAction::Refresh("rt".to_owned()));
    assert_eq!(restore_action(Some(session(1_030)), 1_000), RestoreAction::Refresh("rt".to_owned()));
}

#[test]
fn refresh_delay_leaves_margin() {
    assert_eq!(refresh_delay_ms(&session(4_600), 1_000), 3_540_000);
    assert_eq!(refresh_delay_ms(&session(1_030), 1_000), 0);
}

#[test]
fn refresh_delay_is_capped_for_long_lived_tokens() {
    let year = 365 * 24 * 3600;
    assert_eq!(refresh_delay_ms(&session(1_000 + year), 1_000), u64::from(u32::MAX));
    assert_eq!(refresh_delay_ms(&session(i64::MAX), 0), u64::from(u32::MAX));
}
