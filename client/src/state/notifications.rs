//! Trade notification feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar dropdown polls the most recent trades involving the user and
//! renders them through [`derive_notifications`]. Nothing here touches the
//! network; the poll loop lives in the dropdown component.
//!
//! DESIGN
//! ======
//! A notification is unread when it asks something of the user (a received
//! pending proposal, or an accepted proposal the user sent) and its latest
//! activity is newer than the per-user last-seen marker. Opening the dropdown
//! advances the marker to the newest activity in the window.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use chrono::{DateTime, Utc};

use crate::net::types::{Trade, TradeStatus};

/// Number of recent trades fetched per poll.
pub const NOTIFICATION_WINDOW: usize = 10;

/// Poll period while the feed is mounted.
pub const POLL_INTERVAL_MS: u32 = 30_000;

const SEEN_KEY_PREFIX: &str = "circula_notifications_seen";

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub trade_id: String,
    pub title: String,
    pub body: String,
    pub at: DateTime<Utc>,
    pub unread: bool,
}

impl Notification {
    pub fn href(&self) -> &'static str {
        "/minhas-trocas"
    }
}

/// localStorage key holding the last-seen marker for `user_id`.
pub fn seen_storage_key(user_id: &str) -> String {
    format!("{SEEN_KEY_PREFIX}:{user_id}")
}

/// Title and body text for one trade.
pub fn notification_copy(trade: &Trade) -> (String, String) {
    let desired = trade
        .desired_object
        .as_ref()
        .map(|o| o.title.trim())
        .filter(|t| !t.is_empty())
        .unwrap_or("seu objeto");
    match trade.status {
        TradeStatus::Pending => {
            let proposer = trade
                .proposer
                .as_ref()
                .map(|p| p.name.trim())
                .filter(|n| !n.is_empty())
                .unwrap_or("Alguém");
            ("Nova proposta".to_owned(), format!("{proposer} quer trocar por {desired}"))
        }
        TradeStatus::Accepted => (
            "Troca aceita!".to_owned(),
            format!("Sua oferta pelo objeto \"{desired}\" foi aceita."),
        ),
        _ => ("Atualização".to_owned(), "Você tem uma nova interação.".to_owned()),
    }
}

/// True when the trade is waiting on `user_id`.
pub fn is_actionable(trade: &Trade, user_id: &str) -> bool {
    match trade.status {
        TradeStatus::Pending => trade.recipient_id == user_id,
        TradeStatus::Accepted => trade.proposer_id == user_id,
        _ => false,
    }
}

pub fn is_unread(trade: &Trade, user_id: &str, last_seen: Option<DateTime<Utc>>) -> bool {
    is_actionable(trade, user_id) && last_seen.is_none_or(|seen| trade.activity_at() > seen)
}

/// Map the fetched window into notifications, keeping input order.
pub fn derive_notifications(
    trades: &[Trade],
    user_id: &str,
    last_seen: Option<DateTime<Utc>>,
) -> Vec<Notification> {
    trades
        .iter()
        .take(NOTIFICATION_WINDOW)
        .map(|trade| {
            let (title, body) = notification_copy(trade);
            Notification {
                trade_id: trade.id.clone(),
                title,
                body,
                at: trade.activity_at(),
                unread: is_unread(trade, user_id, last_seen),
            }
        })
        .collect()
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.unread).count()
}

/// Feed state shared between the poll loop and the dropdown.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub trades: Vec<Trade>,
    pub last_seen: Option<DateTime<Utc>>,
    pub open: bool,
}

impl NotificationsState {
    pub fn notifications(&self, user_id: &str) -> Vec<Notification> {
        derive_notifications(&self.trades, user_id, self.last_seen)
    }

    pub fn unread(&self, user_id: &str) -> usize {
        unread_count(&self.notifications(user_id))
    }

    /// Advance the marker to the newest activity in the window.
    ///
    /// Returns the new marker when it moved, so the caller can persist it.
    pub fn mark_all_seen(&mut self) -> Option<DateTime<Utc>> {
        let newest = self.trades.iter().map(Trade::activity_at).max()?;
        if self.last_seen.is_some_and(|seen| seen >= newest) {
            return None;
        }
        self.last_seen = Some(newest);
        self.last_seen
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
