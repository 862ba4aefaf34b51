//! Object detail page with image gallery and owner actions.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::types::Object;
use crate::state::auth::AuthState;
use crate::state::load::Loadable;
use crate::state::objects::status_badge_modifier;
use crate::state::proposal::can_propose;
use crate::state::toast::ToastState;
use crate::util::auth::{install_unauth_redirect, use_user_id};
use crate::util::format::{initials, short_date};
use crate::util::load::{cancel_on_cleanup, spawn_load};
use crate::util::session::client_for;

#[component]
pub fn ObjectDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());
    let params = use_params_map();
    let object_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let object = RwSignal::new(Loadable::<Object>::default());
    cancel_on_cleanup(object);
    let user_id = use_user_id(auth);
    let selected_image = RwSignal::new(0_usize);

    Effect::new(move || {
        let id = object_id.get();
        if user_id.get().is_none() || id.is_empty() {
            return;
        }
        selected_image.set(0);
        let client = client_for(auth);
        spawn_load(
            object,
            async move { client?.fetch_object(&id).await },
            move |e| crate::util::toast::report(toasts, "Erro ao carregar objeto", "Tente novamente mais tarde.", &e),
        );
    });

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content">
                {move || {
                    let state = object.get();
                    if state.state.is_pending() {
                        return view! { <p class="page__status">"Carregando..."</p> }.into_any();
                    }
                    match state.value().cloned() {
                        Some(obj) => view! {
                            <ObjectDetail object=obj viewer=user_id.get() selected=selected_image />
                        }
                        .into_any(),
                        None => view! {
                            <div class="page__empty">
                                <p>"Objeto não encontrado."</p>
                                <a class="btn" href="/">"Voltar para o início"</a>
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn ObjectDetail(object: Object, viewer: Option<String>, selected: RwSignal<usize>) -> impl IntoView {
    let is_owner = viewer.as_deref() == Some(object.owner_id.as_str());
    let proposable = can_propose(&object, viewer.as_deref());
    let edit_href = format!("/editar-objeto/{}", object.id);
    let propose_href = format!("/propor-troca/{}", object.id);
    let badge_class = format!("status-badge status-badge--{}", status_badge_modifier(&object.status));
    let status_label = object.status.label().to_owned();
    let category = object.category.label().to_owned();
    let owner_name = object
        .owner
        .as_ref()
        .map(|o| o.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Usuário".to_owned());
    let owner_course = object.owner.as_ref().and_then(|o| o.course.clone());
    let images = object.images.clone();
    let thumbs = images.clone();
    let listed = short_date(object.created_at);

    view! {
        <article class="object-detail">
            <div class="gallery">
                {move || match images.get(selected.get()).or_else(|| images.first()) {
                    Some(src) => view! { <img class="gallery__main" src=src.clone() alt="" /> }.into_any(),
                    None => view! { <div class="gallery__placeholder">"Sem imagem"</div> }.into_any(),
                }}
                <div class="gallery__thumbs">
                    {thumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <button
                                    type="button"
                                    class="gallery__thumb"
                                    class:gallery__thumb--active=move || selected.get() == i
                                    on:click=move |_| selected.set(i)
                                >
                                    <img src=src alt="" />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="object-detail__info">
                <h1>{object.title}</h1>
                <div class="object-detail__tags">
                    <span class="tag">{category}</span>
                    <span class=badge_class>{status_label}</span>
                </div>
                <p class="object-detail__condition">"Condição: " {object.condition}</p>
                <p class="object-detail__description">{object.description}</p>
                <p class="object-detail__date">"Publicado em " {listed}</p>
                <div class="owner-box">
                    <span class="avatar">{initials(&owner_name)}</span>
                    <span class="owner-box__name">{owner_name}</span>
                    {owner_course.map(|c| view! { <span class="owner-box__course">{c}</span> })}
                </div>
                <div class="object-detail__actions">
                    {is_owner.then(|| view! { <a class="btn" href=edit_href>"Editar"</a> })}
                    {proposable.then(|| view! { <a class="btn btn--primary" href=propose_href>"Propor troca"</a> })}
                </div>
            </div>
        </article>
    }
}
