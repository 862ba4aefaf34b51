//! Fetch-on-mount glue around `state::load::Loadable`.
//!
//! DESIGN
//! ======
//! A load takes a ticket before the request and applies the response only if
//! the ticket is still current. Views call [`cancel_on_cleanup`] so responses
//! landing after navigation are dropped instead of written into a disposed
//! signal.

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::load::Loadable;

/// Start a load into `target`; `on_error` runs only when a failure is applied.
pub fn spawn_load<T, Fut, OnErr>(target: RwSignal<Loadable<T>>, fut: Fut, on_error: OnErr)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    OnErr: FnOnce(ApiError) + 'static,
{
    let Some(ticket) = target.try_update(Loadable::begin) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fut.await;
        let failure = result.as_ref().err().cloned();
        let applied = target.try_update(|l| l.finish(ticket, result)).unwrap_or(false);
        if let (true, Some(err)) = (applied, failure) {
            on_error(err);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ticket, fut, on_error);
}

/// Cancel `target` when the owning view unmounts.
pub fn cancel_on_cleanup<T: Send + Sync + 'static>(target: RwSignal<Loadable<T>>) {
    on_cleanup(move || {
        target.try_update(Loadable::cancel);
    });
}
