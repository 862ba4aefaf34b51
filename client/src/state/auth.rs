//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the root component. Route
//! guards read it to decide redirects; pages read the user id and access
//! token from it to scope their backend calls.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Profile, Session};
use crate::state::session::SessionEvent;

/// Authentication state tracking the session, profile, and restore status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    /// True until the stored session has been restored (or found absent).
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, profile: None, loading: true }
    }
}

impl AuthState {
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.id.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Display name: profile name, else the account email, else a placeholder.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.profile.as_ref().map(|p| p.name.trim()).filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        self.session
            .as_ref()
            .and_then(|s| s.user.email.clone())
            .unwrap_or_else(|| "Usuário".to_owned())
    }

    /// Fold a session-change event into the state.
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::SignedIn(session) => {
                if self.user_id() != Some(session.user.id.as_str()) {
                    self.profile = None;
                }
                self.session = Some(session.clone());
            }
            SessionEvent::TokenRefreshed(session) => {
                self.session = Some(session.clone());
            }
            SessionEvent::SignedOut => {
                self.session = None;
                self.profile = None;
            }
        }
        self.loading = false;
    }

    /// Accept a fetched profile only if it still belongs to the signed-in user.
    pub fn set_profile(&mut self, profile: Profile) -> bool {
        if self.user_id() == Some(profile.id.as_str()) {
            self.profile = Some(profile);
            true
        } else {
            false
        }
    }
}

/// True when, after `event` has been applied, the state still lacks the
/// profile of the session's user. A session restored through a token
/// refresh arrives as `TokenRefreshed`, so this is not limited to sign-in.
pub fn needs_profile(state: &AuthState, event: &SessionEvent) -> bool {
    let Some(session) = event.session() else {
        return false;
    };
    state.profile.as_ref().is_none_or(|p| p.id != session.user.id)
}
