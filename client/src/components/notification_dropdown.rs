//! Navbar bell with the recent-trades notification feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while signed in (inside `Navbar`). Polls the backend every
//! `POLL_INTERVAL_MS` for the latest trades involving the user and writes
//! them into the shared `NotificationsState`.
//!
//! TRADE-OFFS
//! ==========
//! Polling keeps the feed independent from any realtime channel at the cost
//! of up to one interval of latency. Fetch failures are logged only; the
//! previous window stays on screen.

use chrono::Utc;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::notifications::{NotificationsState, seen_storage_key};
use crate::util::format::relative_time;

#[component]
pub fn NotificationDropdown() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed = expect_context::<RwSignal<NotificationsState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                poll_once(auth, feed).await;
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    crate::state::notifications::POLL_INTERVAL_MS,
                )))
                .await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let user_id = move || auth.with(|a| a.user_id().map(str::to_owned)).unwrap_or_default();
    let unread = move || feed.with(|f| f.unread(&user_id()));

    let toggle = move |_| {
        let uid = user_id();
        feed.update(|f| {
            f.open = !f.open;
            if f.open {
                if let Some(marker) = f.mark_all_seen() {
                    crate::util::storage::save_json(&seen_storage_key(&uid), &marker);
                }
            }
        });
    };

    let close = move |_: leptos::ev::MouseEvent| feed.update(|f| f.open = false);

    view! {
        <div class="notifications">
            <button class="btn btn--ghost notifications__bell" on:click=toggle aria-label="Notificações">
                "🔔"
                <Show when=move || { unread() > 0 }>
                    <span class="notifications__count">{move || unread().to_string()}</span>
                </Show>
            </button>
            <Show when=move || feed.with(|f| f.open)>
                <div class="notifications__panel">
                    <h3 class="notifications__heading">"Notificações"</h3>
                    {move || {
                        let items = feed.with(|f| f.notifications(&user_id()));
                        if items.is_empty() {
                            return view! { <p class="notifications__empty">"Nenhuma notificação"</p> }.into_any();
                        }
                        let now = Utc::now();
                        items
                            .into_iter()
                            .map(|n| {
                                let href = n.href();
                                view! {
                                    <a
                                        class="notifications__item"
                                        class:notifications__item--unread=n.unread
                                        href=href
                                        on:click=close
                                    >
                                        <span class="notifications__title">{n.title}</span>
                                        <span class="notifications__body">{n.body}</span>
                                        <span class="notifications__time">{relative_time(n.at, now)}</span>
                                    </a>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn poll_once(auth: RwSignal<AuthState>, feed: RwSignal<NotificationsState>) {
    use crate::state::notifications::NOTIFICATION_WINDOW;

    let Some(user_id) = auth.try_with_untracked(|a| a.user_id().map(str::to_owned)).flatten() else {
        return;
    };
    let client = match crate::util::session::client_for(auth) {
        Ok(client) => client,
        Err(e) => {
            leptos::logging::warn!("notifications: {e}");
            return;
        }
    };
    match client.list_recent_trades_for(&user_id, NOTIFICATION_WINDOW).await {
        Ok(trades) => {
            let last_seen = crate::util::storage::load_json(&seen_storage_key(&user_id));
            feed.try_update(|f| {
                f.trades = trades;
                f.last_seen = last_seen;
            });
        }
        Err(e) => leptos::logging::warn!("notifications poll failed: {e}"),
    }
}
