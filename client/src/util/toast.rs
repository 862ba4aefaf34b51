//! Toast helpers bound to the app-wide `ToastState` context.
//!
//! Pushing a toast also schedules its dismissal in the browser; the timer
//! is a no-op once the toast has been dismissed by hand.

use std::fmt::Display;

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

pub fn push(toasts: RwSignal<ToastState>, title: &str, description: &str, variant: ToastVariant) {
    let Some(id) = toasts.try_update(|t| t.push(title, description, variant)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            crate::state::toast::TOAST_DISMISS_MS,
        )))
        .await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn success(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    push(toasts, title, description, ToastVariant::Default);
}

pub fn error(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    push(toasts, title, description, ToastVariant::Destructive);
}

/// Log a failed operation and surface a generic destructive toast.
pub fn report(toasts: RwSignal<ToastState>, title: &str, description: &str, err: &impl Display) {
    leptos::logging::warn!("{title}: {err}");
    error(toasts, title, description);
}
