//! One trade on the dashboard, rendered from the viewer's side.
//!
//! DESIGN
//! ======
//! Every side-dependent choice (counterpart, captions, "Ver objeto" target,
//! offered actions) comes from `state::trades`; this component only lays
//! them out.

use leptos::prelude::*;

use crate::net::types::{Trade, TradeObject};
use crate::state::trades::{
    TradeAction, TradeTab, allowed_actions, conversation_path, counterpart, object_to_view, side_captions,
    status_style,
};
use crate::util::format::{initials, short_date};

#[component]
pub fn TradeCard(
    trade: Trade,
    tab: TradeTab,
    user_id: String,
    on_action: Callback<(String, TradeAction)>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let style = status_style(&trade.status);
    let status_label = trade.status.label().to_owned();
    let badge_class = format!("status-badge status-badge--{}", style.modifier);
    let other_name = counterpart(&trade, tab)
        .map(|p| p.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Usuário".to_owned());
    let other_initials = initials(&other_name);
    let (offered_caption, desired_caption) = side_captions(tab);
    let view_href = format!("/objeto/{}", object_to_view(&trade, tab));
    let chat_href = conversation_path(&trade);
    let actions = allowed_actions(&trade, &user_id);
    let created = short_date(trade.created_at);
    let trade_id = trade.id.clone();
    let message = trade.message.clone().filter(|m| !m.trim().is_empty());

    view! {
        <article class="trade-card">
            <header class="trade-card__header">
                <span class="avatar avatar--small">{other_initials}</span>
                <span class="trade-card__who">{other_name}</span>
                <span class=badge_class>
                    {style.icon.map(|icon| view! { <span class="status-badge__icon">{icon}</span> })}
                    {status_label}
                </span>
            </header>
            <div class="trade-card__objects">
                <TradeSide caption=offered_caption object=trade.offered_object.clone() />
                <span class="trade-card__arrow" aria-hidden="true">"⇄"</span>
                <TradeSide caption=desired_caption object=trade.desired_object.clone() />
            </div>
            {message.map(|m| view! { <p class="trade-card__message">{m}</p> })}
            <footer class="trade-card__footer">
                <span class="trade-card__date">{created}</span>
                <a class="btn btn--ghost" href=view_href>"Ver objeto"</a>
                {chat_href.map(|href| view! { <a class="btn" href=href>"Conversar"</a> })}
                {actions
                    .into_iter()
                    .map(|action| {
                        let trade_id = trade_id.clone();
                        view! {
                            <button
                                class="btn"
                                class:btn--primary={action == TradeAction::Accept}
                                class:btn--danger={action != TradeAction::Accept}
                                disabled=move || busy.get()
                                on:click=move |_| on_action.run((trade_id.clone(), action))
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </footer>
        </article>
    }
}

#[component]
fn TradeSide(caption: &'static str, object: Option<TradeObject>) -> impl IntoView {
    let title = object.as_ref().map_or_else(|| "Objeto removido".to_owned(), |o| o.title.clone());
    let cover = object.as_ref().and_then(|o| o.cover_image().map(str::to_owned));
    view! {
        <div class="trade-side">
            <span class="trade-side__caption">{caption}</span>
            {cover.map(|src| view! { <img class="trade-side__image" src=src alt="" /> })}
            <span class="trade-side__title">{title}</span>
        </div>
    }
}
