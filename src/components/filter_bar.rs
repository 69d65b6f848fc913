//! Filter Bar Component
//!
//! Category/status/time-window controls for a table screen. Every change
//! funnels through the query store (which owns the page-reset and
//! mutual-exclusion rules) and is mirrored into the URL.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::query::{self, QueryState};

const RANGE_OPTIONS: &[(&str, &str)] = &[
    ("", "All time"),
    ("today", "Today"),
    ("7", "Last 7 days"),
    ("15", "Last 15 days"),
    ("30", "Last 30 days"),
];

fn select_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
    select.value()
}

/// Filter controls. Empty `categories`/`statuses` hide the matching
/// select.
#[component]
pub fn FilterBar(
    query: RwSignal<QueryState>,
    #[prop(into, default = Signal::derive(Vec::new))] categories: Signal<Vec<String>>,
    #[prop(default = Vec::new())] statuses: Vec<&'static str>,
) -> impl IntoView {
    let set_param = move |key: &str, value: String| {
        let value = if value.is_empty() || value == "All" {
            None
        } else {
            Some(value)
        };
        query.update(|q| q.set_param(key, value.as_deref()));
        query::sync_to_url(&query.get_untracked());
    };

    let show_statuses = !statuses.is_empty();

    view! {
        <div class="filter-bar">
            <Show when=move || !categories.get().is_empty()>
                <select
                    class="filter-select"
                    prop:value=move || query.get().get("category").unwrap_or("All").to_string()
                    on:change=move |ev| set_param("category", select_value(&ev))
                >
                    <For
                        each=move || categories.get()
                        key=|c| c.clone()
                        children=move |category| {
                            view! { <option value=category.clone()>{category.clone()}</option> }
                        }
                    />
                </select>
            </Show>

            <Show when=move || show_statuses>
                <select
                    class="filter-select"
                    prop:value=move || query.get().get("status").unwrap_or("All").to_string()
                    on:change=move |ev| set_param("status", select_value(&ev))
                >
                    <option value="All">"All statuses"</option>
                    {statuses
                        .iter()
                        .map(|status| {
                            let s = *status;
                            view! { <option value=s>{s}</option> }
                        })
                        .collect_view()}
                </select>
            </Show>

            <select
                class="filter-select"
                prop:value=move || query.get().get("range").unwrap_or("").to_string()
                on:change=move |ev| set_param("range", select_value(&ev))
            >
                {RANGE_OPTIONS
                    .iter()
                    .map(|(value, label)| {
                        view! { <option value=*value>{*label}</option> }
                    })
                    .collect_view()}
            </select>

            <input
                type="date"
                class="filter-date"
                prop:value=move || query.get().get("createdAt").unwrap_or("").to_string()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_param("createdAt", input.value());
                }
            />

            <button
                class="reset-btn"
                on:click=move |_| {
                    query.update(|q| q.reset());
                    query::sync_to_url(&query.get_untracked());
                }
            >
                "Reset"
            </button>
        </div>
    }
}
