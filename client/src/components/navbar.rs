//! Top navigation bar for signed-in routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the auth context (identity + sign-out), the notification feed
//! and the primary navigation links. Pages render it themselves so `/auth`
//! stays bare.

use leptos::prelude::*;

use crate::components::notification_dropdown::NotificationDropdown;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionEvents;
use crate::util::format::initials;

const LINKS: &[(&str, &str)] = &[
    ("/", "Explorar"),
    ("/cadastrar-objeto", "Cadastrar"),
    ("/meus-objetos", "Meus objetos"),
    ("/minhas-trocas", "Minhas trocas"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let events = expect_context::<SessionEvents>();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                crate::util::session::sign_out(&events, auth).await;
                signing_out.try_set(false);
            });
        }
    };

    let name = move || auth.with(AuthState::display_name);

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Circula"</a>
            <nav class="navbar__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="navbar__link" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <span class="navbar__spacer"></span>
            <Show when=move || auth.with(AuthState::is_signed_in)>
                <NotificationDropdown />
            </Show>
            <a class="navbar__profile" href="/perfil" title=name>
                <span class="avatar">{move || initials(&name())}</span>
            </a>
            <button class="btn btn--ghost navbar__logout" on:click=on_sign_out disabled=move || signing_out.get()>
                "Sair"
            </button>
        </header>
    }
}
