//! "Minhas trocas": sent and received proposals.
//!
//! SYSTEM CONTEXT
//! ==============
//! One fetch of every trade involving the user, partitioned in memory. Status
//! changes (accept, decline, cancel) PATCH the trade and then reload the whole
//! list; the backend decides whether the transition is allowed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::trade_card::TradeCard;
use crate::net::types::Trade;
use crate::state::auth::AuthState;
use crate::state::load::Loadable;
use crate::state::toast::ToastState;
use crate::state::trades::{TradeAction, TradeTab, partition_trades};
use crate::util::auth::{install_unauth_redirect, use_user_id};
use crate::util::load::{cancel_on_cleanup, spawn_load};
use crate::util::session::client_for;

#[component]
pub fn TradesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());
    let user_id = use_user_id(auth);

    let trades = RwSignal::new(Loadable::<Vec<Trade>>::default());
    cancel_on_cleanup(trades);
    let reload = RwSignal::new(0_u32);
    let tab = RwSignal::new(TradeTab::Sent);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        reload.track();
        let Some(uid) = user_id.get() else {
            return;
        };
        let client = client_for(auth);
        spawn_load(trades, async move { client?.list_trades_for(&uid).await }, move |e| {
            crate::util::toast::report(toasts, "Erro ao carregar trocas", "Tente novamente mais tarde.", &e);
        });
    });

    let partition = Memo::new(move |_| {
        let uid = user_id.get().unwrap_or_default();
        trades.with(|t| partition_trades(t.value().map_or(&[][..], Vec::as_slice), &uid))
    });

    let on_action = Callback::new(move |(trade_id, action): (String, TradeAction)| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match client_for(auth) {
                Ok(client) => client.update_trade_status(&trade_id, action.target_status()).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    crate::util::toast::success(toasts, action.success_message(), "");
                    reload.try_update(|n| *n += 1);
                }
                Err(e) => crate::util::toast::report(toasts, "Erro ao atualizar troca", "Tente novamente.", &e),
            }
            busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (trade_id, action);
    });

    let tab_button = move |target: TradeTab| {
        view! {
            <button
                class="filter-tabs__tab"
                class:filter-tabs__tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {target.label()}
                " ("
                {move || partition.with(|p| p.tab(target).len())}
                ")"
            </button>
        }
    };

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content">
                <h1>"Minhas trocas"</h1>
                <div class="filter-tabs" role="tablist">
                    {tab_button(TradeTab::Sent)}
                    {tab_button(TradeTab::Received)}
                </div>
                <Show
                    when=move || !trades.with(|t| t.state.is_pending())
                    fallback=|| view! { <p class="page__status">"Carregando trocas..."</p> }
                >
                    {move || {
                        let current = tab.get();
                        let uid = user_id.get().unwrap_or_default();
                        let items = partition.with(|p| p.tab(current).to_vec());
                        if items.is_empty() {
                            let empty = match current {
                                TradeTab::Sent => "Você ainda não enviou propostas.",
                                TradeTab::Received => "Você ainda não recebeu propostas.",
                            };
                            return view! { <p class="page__empty">{empty}</p> }.into_any();
                        }
                        view! {
                            <div class="trade-list">
                                {items
                                    .into_iter()
                                    .map(|trade| {
                                        view! {
                                            <TradeCard
                                                trade=trade
                                                tab=current
                                                user_id=uid.clone()
                                                on_action=on_action
                                                busy=busy
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </Show>
            </main>
        </div>
    }
}
