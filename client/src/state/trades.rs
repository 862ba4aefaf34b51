//! Trade dashboard derivations.
//!
//! DESIGN
//! ======
//! Sent/received is a partition by id equality over one fetched list, not a
//! second query. Presentation per status comes from a fixed lookup table.
//! Which transitions are offered is decided here for the UI only; the
//! backend's policies remain authoritative.

#[cfg(test)]
#[path = "trades_test.rs"]
mod trades_test;

use crate::net::types::{Profile, Trade, TradeObject, TradeStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TradeTab {
    #[default]
    Sent,
    Received,
}

impl TradeTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sent => "Enviadas",
            Self::Received => "Recebidas",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradePartition {
    pub sent: Vec<Trade>,
    pub received: Vec<Trade>,
}

impl TradePartition {
    pub fn tab(&self, tab: TradeTab) -> &[Trade] {
        match tab {
            TradeTab::Sent => &self.sent,
            TradeTab::Received => &self.received,
        }
    }
}

/// Split trades into those the user proposed and those the user received.
pub fn partition_trades(trades: &[Trade], user_id: &str) -> TradePartition {
    let sent = trades.iter().filter(|t| t.proposer_id == user_id).cloned().collect();
    let received = trades.iter().filter(|t| t.recipient_id == user_id).cloned().collect();
    TradePartition { sent, received }
}

/// Badge presentation for a trade status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeStatusStyle {
    pub icon: Option<&'static str>,
    /// BEM modifier appended to `status-badge--`.
    pub modifier: &'static str,
}

pub fn status_style(status: &TradeStatus) -> TradeStatusStyle {
    let (icon, modifier) = match status {
        TradeStatus::Pending => (Some("◷"), "pending"),
        TradeStatus::Accepted => (Some("✓"), "accepted"),
        TradeStatus::Declined | TradeStatus::Cancelled => (Some("✕"), "closed"),
        TradeStatus::Completed => (None, "completed"),
        TradeStatus::Unknown(_) => (None, "muted"),
    };
    TradeStatusStyle { icon, modifier }
}

/// The other party as seen from `tab`.
pub fn counterpart(trade: &Trade, tab: TradeTab) -> Option<&Profile> {
    match tab {
        TradeTab::Sent => trade.recipient.as_ref(),
        TradeTab::Received => trade.proposer.as_ref(),
    }
}

/// The object "Ver objeto" opens: the one the user would receive.
pub fn object_to_view(trade: &Trade, tab: TradeTab) -> &str {
    match tab {
        TradeTab::Sent => &trade.desired_object_id,
        TradeTab::Received => &trade.offered_object_id,
    }
}

/// (offered caption, desired caption) for a card on `tab`.
pub fn side_captions(tab: TradeTab) -> (&'static str, &'static str) {
    match tab {
        TradeTab::Sent => ("Você oferece", "Recebe"),
        TradeTab::Received => ("Oferecido", "Você recebe"),
    }
}

pub fn offered_and_desired(trade: &Trade) -> (Option<&TradeObject>, Option<&TradeObject>) {
    (trade.offered_object.as_ref(), trade.desired_object.as_ref())
}

/// Conversation link for accepted trades.
pub fn conversation_path(trade: &Trade) -> Option<String> {
    (trade.status == TradeStatus::Accepted).then(|| format!("/trade/{}", trade.id))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TradeAction {
    Accept,
    Decline,
    Cancel,
}

impl TradeAction {
    pub fn target_status(self) -> TradeStatus {
        match self {
            Self::Accept => TradeStatus::Accepted,
            Self::Decline => TradeStatus::Declined,
            Self::Cancel => TradeStatus::Cancelled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Accept => "Aceitar",
            Self::Decline => "Recusar",
            Self::Cancel => "Cancelar proposta",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Accept => "Troca aceita!",
            Self::Decline => "Proposta recusada.",
            Self::Cancel => "Proposta cancelada.",
        }
    }
}

/// Transitions offered to `user_id`: the recipient may accept or decline a
/// pending trade; the proposer may cancel it. Nothing else is offered.
pub fn allowed_actions(trade: &Trade, user_id: &str) -> Vec<TradeAction> {
    if trade.status != TradeStatus::Pending {
        return Vec::new();
    }
    if trade.recipient_id == user_id {
        vec![TradeAction::Accept, TradeAction::Decline]
    } else if trade.proposer_id == user_id {
        vec![TradeAction::Cancel]
    } else {
        Vec::new()
    }
}
