//! Home page: grid of available objects with client-side filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches every available object once per
//! signed-in user and filters in memory; there is no pagination.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::object_card::ObjectCard;
use crate::components::search_filters::SearchFilters;
use crate::net::error::ApiError;
use crate::net::types::{Object, ObjectCategory};
use crate::state::auth::AuthState;
use crate::state::load::Loadable;
use crate::state::objects::{ObjectFilter, filter_objects, found_label, sort_newest_first};
use crate::state::toast::ToastState;
use crate::util::auth::{install_unauth_redirect, use_user_id};
use crate::util::load::{cancel_on_cleanup, spawn_load};
use crate::util::session::client_for;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let objects = RwSignal::new(Loadable::<Vec<Object>>::default());
    cancel_on_cleanup(objects);
    let user_id = use_user_id(auth);

    Effect::new(move || {
        if user_id.get().is_none() {
            return;
        }
        let client = client_for(auth);
        spawn_load(
            objects,
            async move {
                let mut list = client?.list_available_objects().await?;
                sort_newest_first(&mut list);
                Ok::<_, ApiError>(list)
            },
            move |e| {
                crate::util::toast::report(toasts, "Erro ao carregar objetos", "Tente novamente mais tarde.", &e);
            },
        );
    });

    let query = RwSignal::new(String::new());
    let category = RwSignal::new(None::<ObjectCategory>);
    let visible = Memo::new(move |_| {
        let filter = ObjectFilter { category: category.get(), query: query.get() };
        objects.with(|o| filter_objects(o.value().map_or(&[][..], Vec::as_slice), &filter))
    });

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content">
                <section class="hero">
                    <h1>"Explore objetos para trocar"</h1>
                    <p>"Livros, eletrônicos, roupas e mais, oferecidos por quem estuda com você."</p>
                </section>
                <SearchFilters query=query category=category />
                <Show
                    when=move || !objects.with(|o| o.state.is_pending())
                    fallback=|| view! { <p class="page__status">"Carregando objetos..."</p> }
                >
                    <p class="page__count">{move || found_label(visible.with(Vec::len))}</p>
                    <Show
                        when=move || visible.with(|v| !v.is_empty())
                        fallback=|| view! { <p class="page__empty">"Nenhum objeto encontrado."</p> }
                    >
                        <div class="object-grid">
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|object| view! { <ObjectCard object=object /> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}
