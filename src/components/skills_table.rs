//! Skills Table Screen
//!
//! Drag-reorderable list of skills with an inline create form.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{
    bind_global_sort_handlers, create_sort_signals, make_on_row_mousedown,
};

use crate::actions::ActionOutcome;
use crate::api;
use crate::components::{DeleteConfirmModal, Pagination, SkillForm};
use crate::context::use_app_context;
use crate::models::{ListMeta, Skill};
use crate::projection::{project, FilterCriteria, SortMode};
use crate::query;
use crate::reorder::DragList;
use crate::store::{store_push_toast, use_app_store, ToastLevel};

const ROW_SELECTOR: &str = "tr[data-sort-row='skills']";

#[component]
pub fn SkillsTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let query = RwSignal::new(query::from_location());
    let criteria = Memo::new(move |_| FilterCriteria::from_query(&query.get()));
    let list = RwSignal::new(DragList::new(Vec::<Skill>::new()));
    let (meta, set_meta) = signal(ListMeta::default());
    let (loading, set_loading) = signal(false);
    let (adding, set_adding) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let q = query.get();
        set_loading.set(true);
        spawn_local(async move {
            let page = api::get_all_skills(&q).await;
            set_meta.set(page.meta);
            list.update(|l| l.replace(page.items));
            set_loading.set(false);
            let count = page.meta.page_count();
            if query.get_untracked().page() > count {
                query.update(|q| q.clamp_page(count));
                query::sync_to_url(&query.get_untracked());
            }
        });
    });

    let dnd = create_sort_signals();
    bind_global_sort_handlers(
        dnd,
        ROW_SELECTOR,
        move |id| {
            let result = list
                .try_update(|l| l.begin_drag(id, &criteria.get_untracked()))
                .unwrap_or(Err(crate::reorder::ReorderError::UnknownRow));
            if let Err(e) = result {
                store_push_toast(&store, ToastLevel::Warning, e.to_string());
                return false;
            }
            true
        },
        move |index| {
            list.update(|l| l.drag_over(index));
        },
        move |_id, over_index| {
            if over_index.is_none() {
                list.update(|l| l.cancel());
                return;
            }
            let Some(payload) = list.try_update(|l| l.drop_active()).flatten() else {
                return;
            };
            spawn_local(async move {
                let outcome = ActionOutcome::from_result(
                    api::update_skill_order(&payload).await,
                    "Skill order updated",
                );
                list.update(|l| l.settle());
                store_push_toast(&store, outcome.toast_level(), outcome.message);
            });
        },
    );

    let (modal_open, set_modal_open) = signal(false);
    let (selected_id, set_selected_id) = signal(None::<String>);
    let (selected_title, set_selected_title) = signal(None::<String>);

    let on_delete_confirm = move |_| {
        let Some(id) = selected_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let outcome =
                ActionOutcome::from_result(api::delete_skill(&id).await, "Skill deleted");
            store_push_toast(&store, outcome.toast_level(), outcome.message.clone());
            if outcome.success {
                set_modal_open.set(false);
                ctx.reload();
            }
        });
    };

    let rows = move || {
        let l = list.get();
        project(l.items(), &criteria.get(), SortMode::StorageOrder, Utc::now())
    };
    let page_signal = Signal::derive(move || query.get().page());

    view! {
        <div class="table-screen">
            <div class="screen-header">
                <h1>"Manage Skills"</h1>
                <button class="primary-btn" on:click=move |_| set_adding.update(|v| *v = !*v)>
                    {move || if adding.get() { "Close" } else { "Add Skill" }}
                </button>
            </div>

            <Show when=move || adding.get()>
                <SkillForm on_saved=move |_| set_adding.set(false) />
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Skill Name"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !rows().is_empty() fallback=move || view! {
                        <tr><td colspan="2" class="empty-state">{move || if loading.get() { "Loading..." } else { "No results." }}</td></tr>
                    }>
                        <For
                            each=rows
                            key=|s| (s.id.clone(), s.order)
                            children=move |skill| {
                                let id = skill.id.clone();
                                let title = skill.title.clone();
                                let logo = skill.logo.first().cloned();
                                let on_mousedown = make_on_row_mousedown(dnd, id.clone());
                                let row_id = id.clone();
                                let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(row_id.as_str());
                                view! {
                                    <tr
                                        data-sort-row="skills"
                                        class:dragging=is_dragging
                                        on:mousedown=on_mousedown
                                    >
                                        <td class="cell-title">
                                            {logo.map(|src| view! { <img class="row-thumb round" src=src /> })}
                                            <span>{skill.title.clone()}</span>
                                        </td>
                                        <td class="cell-actions">
                                            <button
                                                class="danger"
                                                title="Delete"
                                                on:click=move |_| {
                                                    set_selected_id.set(Some(id.clone()));
                                                    set_selected_title.set(Some(title.clone()));
                                                    set_modal_open.set(true);
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>

            <Pagination
                meta=Signal::derive(move || meta.get())
                page=page_signal
                on_page=move |n: u32| {
                    query.update(|q| q.set_param("page", Some(&n.to_string())));
                    query::sync_to_url(&query.get_untracked());
                }
            />

            <DeleteConfirmModal
                open=modal_open
                name=selected_title
                on_confirm=on_delete_confirm
                on_cancel=move |_| set_modal_open.set(false)
            />
        </div>
    }
}
