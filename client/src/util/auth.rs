//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every interior route applies the same unauthenticated redirect: once the
//! session has been restored (or found missing), a route without a session
//! sends the user to `/auth`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const AUTH_PATH: &str = "/auth";

/// True once auth has settled and no session is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Redirect to `/auth` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(AUTH_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Current user id, notifying only when it actually changes.
///
/// Profile loads and token refreshes update `AuthState` without changing
/// the user; keying fetches on this memo keeps them from re-running.
pub fn use_user_id(auth: RwSignal<AuthState>) -> Memo<Option<String>> {
    Memo::new(move |_| auth.with(|a| a.user_id().map(str::to_owned)))
}
