//! Text + category filter controls for the object grid.

use leptos::prelude::*;

use crate::net::types::ObjectCategory;

#[component]
pub fn SearchFilters(query: RwSignal<String>, category: RwSignal<Option<ObjectCategory>>) -> impl IntoView {
    let options = ObjectCategory::ALL
        .iter()
        .map(|c| view! { <option value=c.as_wire().to_owned()>{c.label().to_owned()}</option> })
        .collect_view();

    view! {
        <div class="search-filters">
            <input
                class="search-filters__query"
                type="search"
                placeholder="Buscar objetos..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select
                class="search-filters__category"
                prop:value=move || category.get().map(|c| c.as_wire().to_owned()).unwrap_or_default()
                on:change=move |ev| category.set(ObjectCategory::parse_known(&event_target_value(&ev)))
            >
                <option value="">"Todas as categorias"</option>
                {options}
            </select>
            <Show when=move || !query.get().is_empty() || category.get().is_some()>
                <button
                    class="btn btn--ghost search-filters__clear"
                    on:click=move |_| {
                        query.set(String::new());
                        category.set(None);
                    }
                >
                    "Limpar filtros"
                </button>
            </Show>
        </div>
    }
}
