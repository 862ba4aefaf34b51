//! Trade proposal checks.
//!
//! These run client-side before the insert. The backend's row policies are
//! the real gate; the checks only keep obviously invalid proposals from
//! leaving the browser.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use crate::net::types::{NewTrade, Object, ObjectStatus, TradeStatus};

pub const MAX_MESSAGE_CHARS: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProposalError {
    #[error("O objeto desejado não foi encontrado.")]
    DesiredMissing,
    #[error("Você não pode propor uma troca pelo seu próprio objeto.")]
    OwnObject,
    #[error("Este objeto não está disponível para troca.")]
    NotAvailable,
    #[error("Selecione um objeto para oferecer.")]
    NoOfferSelected,
    #[error("O objeto oferecido não pertence a você.")]
    OfferNotOwned,
    #[error("A mensagem aceita no máximo {max} caracteres.")]
    MessageTooLong { max: usize },
}

/// The user's objects that can be offered: owned and available.
pub fn eligible_offers(objects: &[Object], user_id: &str) -> Vec<Object> {
    objects
        .iter()
        .filter(|o| o.owner_id == user_id && o.status == ObjectStatus::Available)
        .cloned()
        .collect()
}

/// True when `user_id` may open a proposal for `object` at all.
pub fn can_propose(object: &Object, user_id: Option<&str>) -> bool {
    user_id.is_some_and(|uid| uid != object.owner_id) && object.status == ObjectStatus::Available
}

/// Validate a proposal and build the insert payload.
pub fn build_proposal(
    desired: Option<&Object>,
    offered_id: Option<&str>,
    own_objects: &[Object],
    user_id: &str,
    message: &str,
) -> Result<NewTrade, ProposalError> {
    let desired = desired.ok_or(ProposalError::DesiredMissing)?;
    if desired.owner_id == user_id {
        return Err(ProposalError::OwnObject);
    }
    if desired.status != ObjectStatus::Available {
        return Err(ProposalError::NotAvailable);
    }
    let offered_id = offered_id
        .filter(|id| !id.is_empty())
        .ok_or(ProposalError::NoOfferSelected)?;
    let offered = own_objects
        .iter()
        .find(|o| o.id == offered_id)
        .filter(|o| o.owner_id == user_id)
        .ok_or(ProposalError::OfferNotOwned)?;

    let message = message.trim();
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ProposalError::MessageTooLong { max: MAX_MESSAGE_CHARS });
    }

    Ok(NewTrade {
        proposer_id: user_id.to_owned(),
        recipient_id: desired.owner_id.clone(),
        offered_object_id: offered.id.clone(),
        desired_object_id: desired.id.clone(),
        status: TradeStatus::Pending,
        message: (!message.is_empty()).then(|| message.to_owned()),
    })
}
