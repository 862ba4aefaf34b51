//! "Meus objetos": the user's own listings with a status filter.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::object_card::ObjectCard;
use crate::net::types::Object;
use crate::state::auth::AuthState;
use crate::state::load::Loadable;
use crate::state::objects::{StatusFilter, empty_message, filter_by_status, found_label};
use crate::state::toast::ToastState;
use crate::util::auth::{install_unauth_redirect, use_user_id};
use crate::util::load::{cancel_on_cleanup, spawn_load};
use crate::util::session::client_for;

#[component]
pub fn MyObjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    let user_id = use_user_id(auth);

    let objects = RwSignal::new(Loadable::<Vec<Object>>::default());
    cancel_on_cleanup(objects);
    let status_filter = RwSignal::new(StatusFilter::All);
    let edit_target = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(uid) = user_id.get() else {
            return;
        };
        let client = client_for(auth);
        spawn_load(objects, async move { client?.list_owned_objects(&uid).await }, move |e| {
            crate::util::toast::report(toasts, "Erro ao carregar objetos", "Tente novamente mais tarde.", &e);
        });
    });

    Effect::new(move || {
        if let Some(id) = edit_target.get() {
            edit_target.set(None);
            navigate(&format!("/editar-objeto/{id}"), NavigateOptions::default());
        }
    });

    let visible = Memo::new(move |_| {
        let filter = status_filter.get();
        objects.with(|o| filter_by_status(o.value().map_or(&[][..], Vec::as_slice), filter))
    });
    let owned_count = Memo::new(move |_| objects.with(|o| o.value().map_or(0, Vec::len)));
    let on_edit = Callback::new(move |id: String| edit_target.set(Some(id)));

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content">
                <header class="section-header">
                    <h1>"Meus objetos"</h1>
                    <a class="btn btn--primary" href="/cadastrar-objeto">"+ Cadastrar objeto"</a>
                </header>
                <select
                    class="field__input filter-select"
                    prop:value=move || status_filter.get().key()
                    on:change=move |ev| status_filter.set(StatusFilter::from_key(&event_target_value(&ev)))
                >
                    {StatusFilter::ALL
                        .iter()
                        .map(|filter| view! { <option value=filter.key()>{filter.label()}</option> })
                        .collect_view()}
                </select>
                <Show
                    when=move || !objects.with(|o| o.state.is_pending())
                    fallback=|| view! { <p class="page__status">"Carregando..."</p> }
                >
                    <p class="page__count">{move || found_label(visible.with(Vec::len))}</p>
                    <Show
                        when=move || visible.with(|v| !v.is_empty())
                        fallback=move || {
                            view! {
                                <div class="card page__empty">
                                    <h3>{move || empty_message(owned_count.get()).0}</h3>
                                    <p>{move || empty_message(owned_count.get()).1}</p>
                                    <Show
                                        when=move || { owned_count.get() > 0 }
                                        fallback=|| view! {
                                            <a class="btn btn--primary" href="/cadastrar-objeto">"Cadastrar primeiro objeto"</a>
                                        }
                                    >
                                        <button class="btn" on:click=move |_| status_filter.set(StatusFilter::All)>
                                            "Ver todos os objetos"
                                        </button>
                                    </Show>
                                </div>
                            }
                        }
                    >
                        <div class="object-grid">
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|object| view! { <ObjectCard object=object show_status=true on_edit=on_edit /> })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}
