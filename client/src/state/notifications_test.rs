use chrono::{Duration, TimeZone, Utc};

use super::*;
use crate::net::types::{Profile, TradeObject};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

fn trade(id: &str, proposer: &str, recipient: &str, status: TradeStatus, minutes: i64) -> Trade {
    Trade {
        id: id.to_owned(),
        proposer_id: proposer.to_owned(),
        recipient_id: recipient.to_owned(),
        offered_object_id: "o-1".to_owned(),
        desired_object_id: "o-2".to_owned(),
        status,
        message: None,
        location_id: None,
        created_at: base_time(),
        updated_at: Some(base_time() + Duration::minutes(minutes)),
        proposer: Some(Profile { id: proposer.to_owned(), name: "Ana".to_owned(), ..Profile::default() }),
        recipient: None,
        offered_object: None,
        desired_object: Some(TradeObject {
            id: "o-2".to_owned(),
            title: "Fone".to_owned(),
            category: None,
            images: Vec::new(),
        }),
    }
}

#[test]
fn copy_per_status() {
    let pending = trade("t-1", "a", "me", TradeStatus::Pending, 0);
    assert_eq!(notification_copy(&pending), ("Nova proposta".to_owned(), "Ana quer trocar por Fone".to_owned()));

    let accepted = trade("t-2", "me", "b", TradeStatus::Accepted, 0);
    assert_eq!(notification_copy(&accepted).1, "Sua oferta pelo objeto \"Fone\" foi aceita.");

    let declined = trade("t-3", "me", "b", TradeStatus::Declined, 0);
    assert_eq!(notification_copy(&declined).0, "Atualização");
}

#[test]
fn copy_falls_back_when_joins_missing() {
    let mut t = trade("t-1", "a", "me", TradeStatus::Pending, 0);
    t.proposer = None;
    t.desired_object = None;
    assert_eq!(notification_copy(&t).1, "Alguém quer trocar por seu objeto");
}

#[test]
fn actionable_depends_on_side() {
    assert!(is_actionable(&trade("t", "a", "me", TradeStatus::Pending, 0), "me"));
    assert!(!is_actionable(&trade("t", "me", "b", TradeStatus::Pending, 0), "me"));
    assert!(is_actionable(&trade("t", "me", "b", TradeStatus::Accepted, 0), "me"));
    assert!(!is_actionable(&trade("t", "a", "me", TradeStatus::Accepted, 0), "me"));
    assert!(!is_actionable(&trade("t", "a", "me", TradeStatus::Completed, 0), "me"));
}

#[test]
fn unread_respects_last_seen_marker() {
    let t = trade("t", "a", "me", TradeStatus::Pending, 10);
    assert!(is_unread(&t, "me", None));
    assert!(is_unread(&t, "me", Some(base_time() + Duration::minutes(5))));
    assert!(!is_unread(&t, "me", Some(base_time() + Duration::minutes(10))));
}

#[test]
fn derive_caps_window_and_counts_unread() {
    let trades: Vec<Trade> = (0..12)
        .map(|i| trade(&format!("t-{i}"), "a", "me", TradeStatus::Pending, i))
        .collect();
    let items = derive_notifications(&trades, "me", Some(base_time() + Duration::minutes(4)));
    assert_eq!(items.len(), NOTIFICATION_WINDOW);
    assert_eq!(items[0].trade_id, "t-0");
    assert_eq!(unread_count(&items), 5);
}

#[test]
fn mark_all_seen_clears_unread_and_reports_marker() {
    let mut state = NotificationsState {
        trades: vec![
            trade("t-1", "a", "me", TradeStatus::Pending, 3),
            trade("t-2", "me", "b", TradeStatus::Accepted, 7),
        ],
        ..NotificationsState::default()
    };
    assert_eq!(state.unread("me"), 2);
    assert_eq!(state.mark_all_seen(), Some(base_time() + Duration::minutes(7)));
    assert_eq!(state.unread("me"), 0);
    assert_eq!(state.mark_all_seen(), None);
}

#[test]
fn mark_all_seen_on_empty_feed_is_noop() {
    let mut state = NotificationsState::default();
    assert_eq!(state.mark_all_seen(), None);
    assert_eq!(state.last_seen, None);
}

#[test]
fn seen_key_is_per_user() {
    assert_ne!(seen_storage_key("u-1"), seen_storage_key("u-2"));
}
