//! Clickable summary card for one listed object.
//!
//! DESIGN
//! ======
//! Shared by the home grid, "my objects" and the profile page so every list
//! links to `/objeto/:id` the same way. Owner-only affordances arrive through
//! the optional `on_edit` callback.

use leptos::prelude::*;

use crate::net::types::Object;
use crate::state::objects::status_badge_modifier;

#[component]
pub fn ObjectCard(
    object: Object,
    #[prop(optional)] show_status: bool,
    #[prop(optional)] on_edit: Option<Callback<String>>,
) -> impl IntoView {
    let href = format!("/objeto/{}", object.id);
    let cover = object.cover_image().map(str::to_owned);
    let owner_name = object.owner.as_ref().map(|o| o.name.clone()).filter(|n| !n.is_empty());
    let status_class = format!("status-badge status-badge--{}", status_badge_modifier(&object.status));
    let status_label = object.status.label().to_owned();
    let category = object.category.label().to_owned();
    let id = object.id.clone();

    view! {
        <a class="object-card" href=href>
            <span class="object-card__image">
                {match cover {
                    Some(src) => view! { <img src=src alt=object.title.clone() loading="lazy" /> }.into_any(),
                    None => view! { <span class="object-card__placeholder">"Sem imagem"</span> }.into_any(),
                }}
            </span>
            <span class="object-card__body">
                <span class="object-card__title">{object.title}</span>
                <span class="object-card__meta">
                    <span class="tag">{category}</span>
                    <span class="object-card__condition">{object.condition}</span>
                </span>
                {owner_name.map(|name| view! { <span class="object-card__owner">{name}</span> })}
                {show_status.then(|| view! { <span class=status_class>{status_label}</span> })}
            </span>
            {on_edit.map(|on_edit| {
                view! {
                    <button
                        class="btn object-card__edit"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            on_edit.run(id.clone());
                        }
                    >
                        "Editar"
                    </button>
                }
            })}
        </a>
    }
}
