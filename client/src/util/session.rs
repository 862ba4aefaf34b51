//! Session lifecycle glue between the backend, storage and auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` owns one [`SessionEvents`] registry. Sign-in, sign-up, refresh
//! and sign-out only ever emit events; the app's subscriber applies them to
//! `AuthState`, persists or clears storage, and (re)loads the profile.
//!
//! DESIGN
//! ======
//! Startup restore and refresh scheduling are decided by pure helpers
//! ([`restore_action`], [`refresh_delay_ms`]) so the timing rules are tested
//! natively. The async halves are hydrate-only.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::BackendClient;
use crate::net::error::ApiError;
use crate::net::types::Session;
use crate::state::auth::AuthState;
use crate::state::session::SessionEvent;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionEvents;

pub const SESSION_STORAGE_KEY: &str = "circula_session";

/// Refresh this many seconds before the access token expires.
pub const REFRESH_MARGIN_SECS: i64 = 60;

/// What startup should do with a stored session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreAction {
    /// Nothing stored: settle as signed out.
    SignedOut,
    /// Token still valid: use as is.
    Use(Session),
    /// Token expired or close to it: refresh with this token.
    Refresh(String),
}

pub fn restore_action(stored: Option<Session>, now_secs: i64) -> RestoreAction {
    match stored {
        None => RestoreAction::SignedOut,
        Some(session) if session.is_expired(now_secs, REFRESH_MARGIN_SECS) => {
            RestoreAction::Refresh(session.refresh_token)
        }
        Some(session) => RestoreAction::Use(session),
    }
}

/// Milliseconds to wait before refreshing `session`; zero when already due.
///
/// Capped at `u32::MAX` ms, the longest delay the browser timer accepts.
pub fn refresh_delay_ms(session: &Session, now_secs: i64) -> u64 {
    let due = session.expires_at - REFRESH_MARGIN_SECS - now_secs;
    u64::try_from(due.max(0)).unwrap_or(0).saturating_mul(1000).min(u64::from(u32::MAX))
}

/// Persist or clear the stored session for an event.
pub fn persist(event: &SessionEvent) {
    match event.session() {
        Some(session) => super::storage::save_json(SESSION_STORAGE_KEY, session),
        None => super::storage::remove(SESSION_STORAGE_KEY),
    }
}

/// Backend client carrying the current session's token.
///
/// # Errors
///
/// Returns an error when the build-time backend settings are invalid.
pub fn client_for(auth: RwSignal<AuthState>) -> Result<BackendClient, ApiError> {
    auth.try_with_untracked(|a| BackendClient::for_session(a.session.as_ref()))
        .unwrap_or_else(|| BackendClient::for_session(None))
}

/// Restore the stored session at startup and emit the outcome.
#[cfg(feature = "hydrate")]
pub fn restore(events: SessionEvents) {
    let stored = super::storage::load_json::<Session>(SESSION_STORAGE_KEY);
    match restore_action(stored, chrono::Utc::now().timestamp()) {
        RestoreAction::SignedOut => events.emit(&SessionEvent::SignedOut),
        RestoreAction::Use(session) => events.emit(&SessionEvent::SignedIn(session)),
        RestoreAction::Refresh(token) => {
            leptos::task::spawn_local(async move {
                refresh(&events, &token).await;
            });
        }
    }
}

#[cfg(feature = "hydrate")]
async fn refresh(events: &SessionEvents, refresh_token: &str) {
    let result = match BackendClient::for_session(None) {
        Ok(client) => client.refresh_session(refresh_token).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(session) => events.emit(&SessionEvent::TokenRefreshed(session)),
        Err(e) => {
            leptos::logging::warn!("session refresh failed: {e}");
            events.emit(&SessionEvent::SignedOut);
        }
    }
}

/// Refresh `session` shortly before it expires.
///
/// The timer is abandoned when the auth context is gone or now holds a
/// different refresh token (signed out, re-signed in, or already refreshed).
#[cfg(feature = "hydrate")]
pub fn schedule_refresh(events: SessionEvents, auth: RwSignal<AuthState>, session: Session) {
    let delay = refresh_delay_ms(&session, chrono::Utc::now().timestamp());
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
        let still_current = auth
            .try_with_untracked(|a| {
                a.session.as_ref().is_some_and(|s| s.refresh_token == session.refresh_token)
            })
            .unwrap_or(false);
        if still_current {
            refresh(&events, &session.refresh_token).await;
        }
    });
}

/// Password sign-in; emits `SignedIn` on success.
///
/// # Errors
///
/// Returns the backend error for rejected credentials or transport failure.
#[cfg(feature = "hydrate")]
pub async fn sign_in(events: &SessionEvents, email: &str, password: &str) -> Result<(), ApiError> {
    let client = BackendClient::for_session(None)?;
    let session = client.sign_in_with_password(email, password).await?;
    events.emit(&SessionEvent::SignedIn(session));
    Ok(())
}

/// Register, then sign in with the same credentials.
///
/// # Errors
///
/// Returns the backend error from either step.
#[cfg(feature = "hydrate")]
pub async fn sign_up(events: &SessionEvents, email: &str, password: &str, name: &str) -> Result<(), ApiError> {
    let client = BackendClient::for_session(None)?;
    client.sign_up(email, password, name).await?;
    sign_in(events, email, password).await
}

/// Revoke the token (best effort) and emit `SignedOut` regardless.
#[cfg(feature = "hydrate")]
pub async fn sign_out(events: &SessionEvents, auth: RwSignal<AuthState>) {
    match client_for(auth) {
        Ok(client) => {
            if let Err(e) = client.sign_out().await {
                leptos::logging::warn!("sign-out request failed: {e}");
            }
        }
        Err(e) => leptos::logging::warn!("sign-out skipped: {e}"),
    }
    events.emit(&SessionEvent::SignedOut);
}

/// Fetch the profile for `user_id` and store it if that user is still current.
#[cfg(feature = "hydrate")]
pub fn load_profile(auth: RwSignal<AuthState>, user_id: String) {
    leptos::task::spawn_local(async move {
        let result = match client_for(auth) {
            Ok(client) => client.fetch_profile(&user_id).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(profile) => {
                auth.try_update(|a| a.set_profile(profile));
            }
            Err(e) => leptos::logging::warn!("profile load failed for {user_id}: {e}"),
        }
    });
}
