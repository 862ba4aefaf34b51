use chrono::{TimeZone, Utc};

use super::*;
use crate::net::types::ObjectCategory;

fn object(id: &str, owner: &str, status: ObjectStatus) -> Object {
    Object {
        id: id.to_owned(),
        title: format!("Objeto {id}"),
        description: String::new(),
        category: ObjectCategory::Other,
        condition: "Usado".to_owned(),
        status,
        images: Vec::new(),
        owner_id: owner.to_owned(),
        owner: None,
        created_at: Utc.with_ymd_and_hms(2024, 2, 2, 0, 0, 0).unwrap(),
        updated_at: None,
    }
}

fn mine() -> Vec<Object> {
    vec![
        object("m-1", "me", ObjectStatus::Available),
        object("m-2", "me", ObjectStatus::Traded),
    ]
}

#[test]
fn valid_proposal_builds_pending_trade() {
    let desired = object("d-1", "other", ObjectStatus::Available);
    let trade = build_proposal(Some(&desired), Some("m-1"), &mine(), "me", "  Topa? ").unwrap();
    assert_eq!(trade.proposer_id, "me");
    assert_eq!(trade.recipient_id, "other");
    assert_eq!(trade.offered_object_id, "m-1");
    assert_eq!(trade.desired_object_id, "d-1");
    assert_eq!(trade.status, TradeStatus::Pending);
    assert_eq!(trade.message.as_deref(), Some("Topa?"));
}

#[test]
fn blank_message_is_omitted() {
    let desired = object("d-1", "other", ObjectStatus::Available);
    let trade = build_proposal(Some(&desired), Some("m-1"), &mine(), "me", "   ").unwrap();
    assert_eq!(trade.message, None);
}

#[test]
fn rejects_missing_own_or_unavailable_desired() {
    assert_eq!(build_proposal(None, Some("m-1"), &mine(), "me", ""), Err(ProposalError::DesiredMissing));
    let own = object("d-1", "me", ObjectStatus::Available);
    assert_eq!(build_proposal(Some(&own), Some("m-1"), &mine(), "me", ""), Err(ProposalError::OwnObject));
    let traded = object("d-1", "other", ObjectStatus::InNegotiation);
    assert_eq!(build_proposal(Some(&traded), Some("m-1"), &mine(), "me", ""), Err(ProposalError::NotAvailable));
}

#[test]
fn rejects_missing_or_foreign_offer() {
    let desired = object("d-1", "other", ObjectStatus::Available);
    assert_eq!(build_proposal(Some(&desired), None, &mine(), "me", ""), Err(ProposalError::NoOfferSelected));
    assert_eq!(build_proposal(Some(&desired), Some(""), &mine(), "me", ""), Err(ProposalError::NoOfferSelected));
    let foreign = vec![object("x-1", "someone", ObjectStatus::Available)];
    assert_eq!(build_proposal(Some(&desired), Some("x-1"), &foreign, "me", ""), Err(ProposalError::OfferNotOwned));
}

#[test]
fn rejects_long_message() {
    let desired = object("d-1", "other", ObjectStatus::Available);
    let message = "a".repeat(MAX_MESSAGE_CHARS + 1);
    assert_eq!(
        build_proposal(Some(&desired), Some("m-1"), &mine(), "me", &message),
        Err(ProposalError::MessageTooLong { max: 500 })
    );
}

#[test]
fn eligible_offers_are_owned_and_available() {
    let mut objects = mine();
    objects.push(object("x-1", "other", ObjectStatus::Available));
    let ids: Vec<_> = eligible_offers(&objects, "me").into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec!["m-1".to_owned()]);
}

#[test]
fn can_propose_requires_foreign_available_object() {
    let desired = object("d-1", "other", ObjectStatus::Available);
    assert!(can_propose(&desired, Some("me")));
    assert!(!can_propose(&desired, Some("other")));
    assert!(!can_propose(&desired, None));
    assert!(!can_propose(&object("d-2", "other", ObjectStatus::Traded), Some("me")));
}
