//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1>"404"</h1>
            <p>"Página não encontrada."</p>
            <a class="btn btn--primary" href="/">"Voltar para o início"</a>
        </div>
    }
}
