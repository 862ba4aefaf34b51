//! Sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route reachable without a session. A successful sign-in emits a
//! `SignedIn` event; the app-level subscriber stores the session and the
//! effect below moves the user on to `/`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionEvents;
use crate::state::toast::ToastState;

pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Trimmed, validated form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Validate the form for `mode`, returning the toast message on failure.
pub fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    name: &str,
) -> Result<Credentials, &'static str> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Preencha e-mail e senha.");
    }
    if !email.contains('@') {
        return Err("Informe um e-mail válido.");
    }
    if mode == AuthMode::SignUp {
        if name.is_empty() {
            return Err("Informe seu nome completo.");
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err("A senha deve ter pelo menos 6 caracteres.");
        }
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned(), name: name.to_owned() })
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let events = expect_context::<SessionEvents>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if auth.with(|a| !a.loading && a.is_signed_in()) {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current_mode = mode.get_untracked();
        let creds = match validate_credentials(
            current_mode,
            &email.get_untracked(),
            &password.get_untracked(),
            &name.get_untracked(),
        ) {
            Ok(creds) => creds,
            Err(message) => {
                crate::util::toast::error(toasts, "Dados inválidos", message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let events = events.clone();
            leptos::task::spawn_local(async move {
                let result = match current_mode {
                    AuthMode::SignIn => crate::util::session::sign_in(&events, &creds.email, &creds.password).await,
                    AuthMode::SignUp => {
                        crate::util::session::sign_up(&events, &creds.email, &creds.password, &creds.name).await
                    }
                };
                match (result, current_mode) {
                    (Ok(()), AuthMode::SignIn) => crate::util::toast::success(toasts, "Bem-vindo de volta!", ""),
                    (Ok(()), AuthMode::SignUp) => {
                        crate::util::toast::success(toasts, "Conta criada!", "Seu cadastro foi concluído.");
                    }
                    (Err(e), AuthMode::SignIn) => {
                        crate::util::toast::report(toasts, "Erro ao entrar", "Verifique seu e-mail e senha.", &e);
                    }
                    (Err(e), AuthMode::SignUp) => {
                        crate::util::toast::report(toasts, "Erro ao cadastrar", "Não foi possível criar sua conta.", &e);
                    }
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = creds;
    };

    let tab = move |target: AuthMode, label: &'static str| {
        view! {
            <button
                type="button"
                class="auth-tabs__tab"
                class:auth-tabs__tab--active=move || mode.get() == target
                on:click=move |_| mode.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Circula"</h1>
                <p class="auth-card__subtitle">"Troque objetos com a comunidade do campus"</p>
                <div class="auth-tabs">
                    {tab(AuthMode::SignIn, "Entrar")}
                    {tab(AuthMode::SignUp, "Cadastrar")}
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <label class="field">
                            <span class="field__label">"Nome completo"</span>
                            <input
                                class="field__input"
                                type="text"
                                autocomplete="name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="field">
                        <span class="field__label">"E-mail"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            placeholder="voce@universidade.br"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Senha"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete=move || {
                                if mode.get() == AuthMode::SignUp { "new-password" } else { "current-password" }
                            }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || match (mode.get(), busy.get()) {
                            (_, true) => "Aguarde...",
                            (AuthMode::SignIn, false) => "Entrar",
                            (AuthMode::SignUp, false) => "Criar conta",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
