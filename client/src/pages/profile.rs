//! Profile page: identity, rating and a preview of the user's objects.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::object_card::ObjectCard;
use crate::net::error::ApiError;
use crate::net::types::{Object, Profile};
use crate::state::auth::AuthState;
use crate::state::load::Loadable;
use crate::state::toast::ToastState;
use crate::util::auth::{install_unauth_redirect, use_user_id};
use crate::util::format::{format_rating, initials, short_date};
use crate::util::load::{cancel_on_cleanup, spawn_load};
use crate::util::session::client_for;

/// Objects shown before the "see all" link.
pub const PROFILE_PREVIEW_OBJECTS: usize = 4;

pub fn see_all_label(total: usize) -> Option<String> {
    (total > PROFILE_PREVIEW_OBJECTS).then(|| format!("Ver os {total} objetos"))
}

#[derive(Clone, Debug, PartialEq)]
struct ProfileData {
    profile: Profile,
    rating: f64,
    objects: Vec<Object>,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());
    let user_id = use_user_id(auth);

    let data = RwSignal::new(Loadable::<ProfileData>::default());
    cancel_on_cleanup(data);

    Effect::new(move || {
        let Some(uid) = user_id.get() else {
            return;
        };
        let client = client_for(auth);
        spawn_load(
            data,
            async move {
                let client = client?;
                let profile = client.fetch_profile(&uid).await?;
                let rating = match client.user_rating(&uid).await {
                    Ok(rating) => rating,
                    Err(e) => {
                        leptos::logging::warn!("rating unavailable for {uid}: {e}");
                        0.0
                    }
                };
                let objects = client.list_owned_objects(&uid).await?;
                Ok::<_, ApiError>(ProfileData { profile, rating, objects })
            },
            move |e| crate::util::toast::report(toasts, "Erro ao carregar perfil", "Tente novamente mais tarde.", &e),
        );
    });

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content">
                {move || {
                    let state = data.get();
                    if state.state.is_pending() {
                        return view! { <p class="page__status">"Carregando perfil..."</p> }.into_any();
                    }
                    match state.value().cloned() {
                        Some(d) => view! { <ProfileView data=d /> }.into_any(),
                        None => view! { <p class="page__empty">"Perfil indisponível."</p> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn ProfileView(data: ProfileData) -> impl IntoView {
    let ProfileData { profile, rating, objects } = data;
    let name = if profile.name.trim().is_empty() { "Usuário".to_owned() } else { profile.name.clone() };
    let total = objects.len();
    let see_all = see_all_label(total);
    let member_since = profile.created_at.map(short_date);
    let preview = objects
        .into_iter()
        .take(PROFILE_PREVIEW_OBJECTS)
        .map(|object| view! { <ObjectCard object=object show_status=true /> })
        .collect_view();

    view! {
        <section class="profile-header card">
            <span class="avatar avatar--large">{initials(&name)}</span>
            <div class="profile-header__info">
                <h1>{name}</h1>
                <p class="profile-header__email">{profile.email}</p>
                {profile.phone.map(|p| view! { <p class="profile-header__line">"Telefone: " {p}</p> })}
                {profile.course.map(|c| view! { <p class="profile-header__line">"Curso: " {c}</p> })}
                {member_since.map(|d| view! { <p class="profile-header__line">"Membro desde " {d}</p> })}
                {profile.bio.map(|b| view! { <p class="profile-header__bio">{b}</p> })}
            </div>
            <div class="profile-header__rating">
                <span class="profile-header__stars">"★ " {format_rating(rating)}</span>
                <span class="profile-header__caption">"Avaliação"</span>
            </div>
        </section>
        <section class="profile-objects">
            <header class="section-header">
                <h2>"Meus objetos"</h2>
                {see_all.map(|label| view! { <a class="btn btn--ghost" href="/meus-objetos">{label}</a> })}
            </header>
            {if total == 0 {
                view! {
                    <p class="page__empty">
                        "Você ainda não cadastrou objetos. "
                        <a href="/cadastrar-objeto">"Cadastrar agora"</a>
                    </p>
                }
                .into_any()
            } else {
                view! { <div class="object-grid">{preview}</div> }.into_any()
            }}
        </section>
    }
}
