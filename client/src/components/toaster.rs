//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class="toast"
                                class:toast--destructive={toast.variant == ToastVariant::Destructive}
                            >
                                <div class="toast__text">
                                    <strong class="toast__title">{toast.title}</strong>
                                    {(!toast.description.is_empty())
                                        .then(|| view! { <p class="toast__description">{toast.description}</p> })}
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Fechar"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
