//! New object page: form, image upload, insert.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::object_form_fields::ObjectFormFields;
use crate::state::auth::AuthState;
use crate::state::object_form::ObjectForm;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CreateObjectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let form = RwSignal::new(ObjectForm::default());
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

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if let Err(err) = form.with_untracked(ObjectForm::validate) {
            crate::util::toast::error(toasts, err.title(), &err.to_string());
            return;
        }
        let Some(user_id) = auth.with_untracked(|a| a.user_id().map(str::to_owned)) else {
            return;
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::NewObject;
            use crate::util::image_queue;

            leptos::task::spawn_local(async move {
                let snapshot = form.get_untracked();
                let client = match crate::util::session::client_for(auth) {
                    Ok(client) => client,
                    Err(e) => {
                        crate::util::toast::report(toasts, "Erro ao cadastrar objeto", "Tente novamente.", &e);
                        saving.try_set(false);
                        return;
                    }
                };
                let uploaded = match image_queue::upload_all(&client, &user_id, &snapshot.pending_images).await {
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
                match client.create_object(&NewObject { draft, owner_id: user_id }).await {
                    Ok(created) => {
                        image_queue::release_all(&snapshot.pending_images);
                        form.try_update(|f| f.pending_images.clear());
                        crate::util::toast::success(toasts, "Objeto cadastrado!", "Seu objeto já está disponível.");
                        redirect.try_set(Some(format!("/objeto/{}", created.id)));
                    }
                    Err(e) => {
                        crate::util::toast::report(toasts, "Erro ao cadastrar objeto", "Tente novamente.", &e);
                    }
                }
                saving.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    };

    view! {
        <div class="page">
            <Navbar />
            <main class="page__content page__content--narrow">
                <h1>"Cadastrar objeto"</h1>
                <form class="card" on:submit=on_submit>
                    <ObjectFormFields form=form />
                    <div class="form-actions">
                        <a class="btn btn--ghost" href="/meus-objetos">"Cancelar"</a>
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Salvando..." } else { "Cadastrar" }}
                        </button>
                    </div>
                </form>
            </main>
        </div>
    }
}
