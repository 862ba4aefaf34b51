//! Edit object page.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch ("Erro ao carregar") or a foreign object ("Acesso negado")
//! both toast and send the user back to `/meus-objetos`. The image cap is
//! checked again on submit, before the first upload.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::components::object_form_fields::ObjectFormFields;
use crate::net::types::Object;
use crate::state::auth::AuthState;
use crate::state::load::Loadable;
use crate::state::object_form::{ObjectForm, ensure_owner};
use crate::state::toast::ToastState;
use crate::util::auth::{install_unauth_redirect, use_user_id};
use crate::util::load::{cancel_on_cleanup, spawn_load};
use crate::util::session::client_for;

#[component]
pub fn EditObjectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    let params = use_params_map();
    let object_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let user_id = use_user_id(auth);

    let object = RwSignal::new(Loadable::<Object>::default());
    cancel_on_cleanup(object);
    let form = RwSignal::new(ObjectForm::default());
    let ready = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(path) = redirect.get() {
            redirect.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        form.try_with_untracked(|f| crate::util::image_queue::release_all(&f.pending_images));
    });

    Effect::new(move || {
        let id = object_id.get();
        if user_id.get().is_none() || id.is_empty() {
            return;
        }
        ready.set(false);
        let client = client_for(auth);
        spawn_load(object, async move { client?.fetch_object(&id).await }, move |e| {
            crate::util::toast::report(toasts, "Erro ao carregar", "Não foi possível carregar o objeto.", &e);
            redirect.try_set(Some("/meus-objetos".to_owned()));
        });
    });

    Effect::new(move || {
        let Some(loaded) = object.with(|o| o.value().cloned()) else {
            return;
        };
        let Some(uid) = user_id.get_untracked() else {
            return;
        };
        if let Err(err) = ensure_owner(&loaded, &uid) {
            crate::util::toast::error(toasts, err.title(), &err.to_string());
            redirect.set(Some("/meus-objetos".to_owned()));
            return;
        }
        form.set(ObjectForm::from_object(&loaded));
        ready.set(true);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || !ready.get_untracked() {
            return;
        }
        if let Err(err) = form.with_untracked(ObjectForm::validate) {
            crate::util::toast::error(toasts, err.title(), &err.to_string());
            return;
        }
        let Some(uid) = user_id.get_untracked() else {
            return;
        };
        let id = object_id.get_untracked();
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::ObjectUpdate;
            use crate::util::image_queue;

            leptos::task::spawn_local(async move {
                let snapshot = form.get_untracked();
                let client = match client_for(auth) {
                    Ok(client) => client,
                    Err(e) => {
                        crate::util::toast::report(toasts, "Erro ao atualizar", "Tente novamente.", &e);
                        saving.try_set(false);
                        return;
                    }
                };
                let uploaded = match image_queue::upload_all(&client, &uid, &snapshot.pending_images).await {
                    Ok(urls) => urls,
                    Err(e) => {
                        crate::util::toast::report(toasts, "Erro ao enviar imagens", "Tente novamente.", &e);
                        saving.try_set(false);
                        return;
                    }
                };
                let draft = match snapshot.to_draft(uploaded) {
                    Ok(draft) => draft,
                    Err(err) => {
                        crate::util::toast::error(toasts, err.title(), &err.to_string());
                        saving.try_set(false);
                        return;
                    }
                };
                let update = ObjectUpdate { draft, updated_at: chrono::Utc::now() };
                match client.update_object(&id, &update).await {
                    Ok(()) => {
                        image_queue::release_all(&snapshot.pending_images);
                        form.try_update(|f| f.pending_images.clear());
                        crate::util::toast::success(toasts, "Objeto atualizado!", "As alterações foram salvas.");
                        redirect.try_set(Some(format!("/objeto/{id}")));
                    }
                    Err(e) => crate::util::toast::report(toasts, "Erro ao atualizar", "Tente novamente.", &e),
                }
                saving.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (uid, id);
    };

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content page__content--narrow">
                <h1>"Editar objeto"</h1>
                <Show when=move || ready.get() fallback=|| view! { <p class="page__status">"Carregando..."</p> }>
                    <form class="card" on:submit=on_submit>
                        <ObjectFormFields form=form show_status=true />
                        <div class="form-actions">
                            <a class="btn btn--ghost" href=move || format!("/objeto/{}", object_id.get())>
                                "Cancelar"
                            </a>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Salvando..." } else { "Salvar alterações" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </main>
        </div>
    }
}
