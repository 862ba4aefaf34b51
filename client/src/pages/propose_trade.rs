//! Trade proposal page for a desired object.
//!
//! The user picks one of their own available objects to offer and may add a
//! short message. Proposal checks run before the insert; see
//! `state::proposal`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::error::ApiError;
use crate::net::types::Object;
use crate::state::auth::AuthState;
use crate::state::load::Loadable;
use crate::state::proposal::{MAX_MESSAGE_CHARS, build_proposal, eligible_offers};
use crate::state::toast::ToastState;
use crate::util::auth::{install_unauth_redirect, use_user_id};
use crate::util::load::{cancel_on_cleanup, spawn_load};
use crate::util::session::client_for;

#[derive(Clone, Debug, PartialEq)]
struct ProposalData {
    desired: Object,
    offers: Vec<Object>,
}

#[component]
pub fn ProposeTradePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    let params = use_params_map();
    let object_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let user_id = use_user_id(auth);

    let data = RwSignal::new(Loadable::<ProposalData>::default());
    cancel_on_cleanup(data);
    let offered = RwSignal::new(None::<String>);
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(path) = redirect.get() {
            redirect.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let id = object_id.get();
        let Some(uid) = user_id.get() else {
            return;
        };
        if id.is_empty() {
            return;
        }
        offered.set(None);
        let client = client_for(auth);
        spawn_load(
            data,
            async move {
                let client = client?;
                let desired = client.fetch_object(&id).await?;
                let own = client.list_owned_objects(&uid).await?;
                Ok::<_, ApiError>(ProposalData { desired, offers: eligible_offers(&own, &uid) })
            },
            move |e| crate::util::toast::report(toasts, "Erro ao carregar", "Não foi possível carregar o objeto.", &e),
        );
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let Some(uid) = user_id.get_untracked() else {
            return;
        };
        let proposal = data.with_untracked(|d| {
            let loaded = d.value();
            build_proposal(
                loaded.map(|p| &p.desired),
                offered.get_untracked().as_deref(),
                loaded.map_or(&[][..], |p| p.offers.as_slice()),
                &uid,
                &message.get_untracked(),
            )
        });
        let trade = match proposal {
            Ok(trade) => trade,
            Err(err) => {
                crate::util::toast::error(toasts, "Não foi possível enviar", &err.to_string());
                return;
            }
        };
        sending.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match client_for(auth) {
                Ok(client) => client.create_trade(&trade).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    crate::util::toast::success(toasts, "Proposta enviada!", "Aguarde a resposta do dono do objeto.");
                    redirect.try_set(Some("/minhas-trocas".to_owned()));
                }
                Err(e) => crate::util::toast::report(toasts, "Erro ao enviar proposta", "Tente novamente.", &e),
            }
            sending.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = trade;
    };

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content page__content--narrow">
                <h1>"Propor troca"</h1>
                {move || {
                    let state = data.get();
                    if state.state.is_pending() {
                        return view! { <p class="page__status">"Carregando..."</p> }.into_any();
                    }
                    let Some(loaded) = state.value().cloned() else {
                        return view! { <p class="page__empty">"Objeto não encontrado."</p> }.into_any();
                    };
                    let desired_title = loaded.desired.title.clone();
                    let desired_href = format!("/objeto/{}", loaded.desired.id);
                    let no_offers = loaded.offers.is_empty();
                    let options = loaded
                        .offers
                        .into_iter()
                        .map(|o| view! { <option value=o.id.clone()>{o.title}</option> })
                        .collect_view();
                    view! {
                        <form class="card" on:submit=on_submit>
                            <p class="propose__target">
                                "Você quer: " <a href=desired_href>{desired_title}</a>
                            </p>
                            {no_offers
                                .then(|| {
                                    view! {
                                        <p class="page__empty">
                                            "Você não tem objetos disponíveis para oferecer. "
                                            <a href="/cadastrar-objeto">"Cadastrar um objeto"</a>
                                        </p>
                                    }
                                })}
                            <label class="field">
                                <span class="field__label">"Objeto oferecido"</span>
                                <select
                                    class="field__input"
                                    prop:value=move || offered.get().unwrap_or_default()
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        offered.set((!value.is_empty()).then_some(value));
                                    }
                                >
                                    <option value="">"Selecione um objeto"</option>
                                    {options}
                                </select>
                            </label>
                            <label class="field">
                                <span class="field__label">"Mensagem (opcional)"</span>
                                <textarea
                                    class="field__input field__input--area"
                                    maxlength=MAX_MESSAGE_CHARS.to_string()
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                ></textarea>
                                <span class="field__hint">
                                    {move || format!("{}/{MAX_MESSAGE_CHARS}", message.with(|m| m.chars().count()))}
                                </span>
                            </label>
                            <div class="form-actions">
                                <a class="btn btn--ghost" href=format!("/objeto/{}", object_id.get())>"Cancelar"</a>
                                <button class="btn btn--primary" type="submit" disabled=move || sending.get() || no_offers>
                                    {move || if sending.get() { "Enviando..." } else { "Enviar proposta" }}
                                </button>
                            </div>
                        </form>
                    }
                    .into_any()
                }}
            </main>
        </div>
    }
}
