//! Shared field set for the create and edit object pages.
//!
//! ERROR HANDLING
//! ==============
//! A file batch that would pass the image cap is rejected whole with a
//! "Limite de imagens" toast; its preview URLs are released immediately.

use leptos::prelude::*;

use crate::net::types::{ObjectCategory, ObjectStatus};
use crate::state::object_form::{
    MAX_CONDITION_CHARS, MAX_DESCRIPTION_CHARS, MAX_IMAGES, MAX_TITLE_CHARS, ObjectForm,
};
use crate::state::toast::ToastState;

#[component]
pub fn ObjectFormFields(form: RwSignal<ObjectForm>, #[prop(optional)] show_status: bool) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::image_queue;

            let batch = image_queue::register(image_queue::files_from_input(&ev));
            if batch.is_empty() {
                return;
            }
            if let Some(Err(err)) = form.try_update(|f| f.add_images(batch.clone())) {
                image_queue::release_all(&batch);
                crate::util::toast::error(toasts, err.title(), &err.to_string());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, toasts);
    };

    let remove_existing = move |index: usize| {
        form.update(|f| {
            f.remove_existing_image(index);
        });
    };
    let remove_pending = move |index: usize| {
        let removed = form.try_update(|f| f.remove_pending_image(index)).flatten();
        #[cfg(feature = "hydrate")]
        if let Some(image) = removed {
            crate::util::image_queue::release(&image);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = removed;
    };

    let category_options = ObjectCategory::ALL
        .iter()
        .map(|c| view! { <option value=c.as_wire().to_owned()>{c.label().to_owned()}</option> })
        .collect_view();
    let status_options = ObjectStatus::EDITABLE
        .iter()
        .map(|s| view! { <option value=s.as_wire().to_owned()>{s.label().to_owned()}</option> })
        .collect_view();

    view! {
        <div class="object-form">
            <label class="field">
                <span class="field__label">"Título"</span>
                <input
                    class="field__input"
                    type="text"
                    maxlength=MAX_TITLE_CHARS.to_string()
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Descrição"</span>
                <textarea
                    class="field__input field__input--area"
                    maxlength=MAX_DESCRIPTION_CHARS.to_string()
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </label>
            <div class="object-form__row">
                <label class="field">
                    <span class="field__label">"Categoria"</span>
                    <select
                        class="field__input"
                        prop:value=move || {
                            form.with(|f| f.category.as_ref().map(|c| c.as_wire().to_owned()).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            form.update(|f| f.category = ObjectCategory::parse_known(&event_target_value(&ev)));
                        }
                    >
                        <option value="">"Selecione"</option>
                        {category_options}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Condição"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Ex.: Novo, Usado, Bom estado"
                        maxlength=MAX_CONDITION_CHARS.to_string()
                        prop:value=move || form.with(|f| f.condition.clone())
                        on:input=move |ev| form.update(|f| f.condition = event_target_value(&ev))
                    />
                </label>
            </div>
            {show_status
                .then(|| {
                    view! {
                        <label class="field">
                            <span class="field__label">"Status"</span>
                            <select
                                class="field__input"
                                prop:value=move || form.with(|f| f.status.as_wire().to_owned())
                                on:change=move |ev| {
                                    form.update(|f| f.status = ObjectStatus::from(event_target_value(&ev)));
                                }
                            >
                                {status_options}
                            </select>
                        </label>
                    }
                })}
            <div class="field">
                <span class="field__label">
                    {move || format!("Imagens ({}/{MAX_IMAGES})", form.with(ObjectForm::image_count))}
                </span>
                <div class="image-grid">
                    {move || {
                        form.with(|f| {
                            f.existing_images
                                .iter()
                                .enumerate()
                                .map(|(i, url)| {
                                    view! {
                                        <figure class="image-grid__item">
                                            <img src=url.clone() alt="" />
                                            <button
                                                type="button"
                                                class="image-grid__remove"
                                                aria-label="Remover imagem"
                                                on:click=move |_| remove_existing(i)
                                            >
                                                "✕"
                                            </button>
                                        </figure>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                    {move || {
                        form.with(|f| {
                            f.pending_images
                                .iter()
                                .enumerate()
                                .map(|(i, image)| {
                                    view! {
                                        <figure class="image-grid__item image-grid__item--pending">
                                            <img src=image.preview_url.clone() alt=image.name.clone() />
                                            <button
                                                type="button"
                                                class="image-grid__remove"
                                                aria-label="Remover imagem"
                                                on:click=move |_| remove_pending(i)
                                            >
                                                "✕"
                                            </button>
                                        </figure>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                    <Show when=move || form.with(|f| f.remaining_image_slots() > 0)>
                        <label class="image-grid__add">
                            "+ Adicionar"
                            <input type="file" accept="image/*" multiple=true class="visually-hidden" on:change=on_files />
                        </label>
                    </Show>
                </div>
            </div>
        </div>
    }
}
