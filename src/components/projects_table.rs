//! Projects Table Screen
//!
//! Reorder-primary table: rows are dragged into the storage order shown
//! on the public site. Active filters disable dragging, since an
//! index-based order is only coherent over the full collection.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{
    bind_global_sort_handlers, create_sort_signals, make_on_row_mousedown,
};

use crate::actions::ActionOutcome;
use crate::api;
use crate::components::{DeleteConfirmModal, FilterBar, Pagination};
use crate::context::{use_app_context, Route};
use crate::models::{ListMeta, Project};
use crate::projection::{category_options, project, FilterCriteria, SortMode};
use crate::query;
use crate::reorder::DragList;
use crate::store::{store_push_toast, use_app_store, ToastLevel};

const ROW_SELECTOR: &str = "tr[data-sort-row='projects']";

#[component]
pub fn ProjectsTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let query = RwSignal::new(query::from_location());
    let criteria = Memo::new(move |_| FilterCriteria::from_query(&query.get()));
    let list = RwSignal::new(DragList::new(Vec::<Project>::new()));
    let (meta, set_meta) = signal(ListMeta::default());
    let (loading, set_loading) = signal(false);

    // Fetch on mount, on every query change, and on reload trigger
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let q = query.get();
        set_loading.set(true);
        spawn_local(async move {
            let page = api::get_all_projects(&q).await;
            set_meta.set(page.meta);
            list.update(|l| l.replace(page.items));
            set_loading.set(false);
            // Snap back if the filter change left us past the last page
            let count = page.meta.page_count();
            if query.get_untracked().page() > count {
                query.update(|q| q.clamp_page(count));
                query::sync_to_url(&query.get_untracked());
            }
        });
    });

    // ========================
    // Drag-and-drop wiring
    // ========================
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
                // Released outside the table: revert, no network call
                list.update(|l| l.cancel());
                return;
            }
            let payload = list.try_update(|l| l.drop_active()).flatten();
            let Some(payload) = payload else {
                return;
            };
            spawn_local(async move {
                let outcome = ActionOutcome::from_result(
                    api::update_project_order(&payload).await,
                    "Project order updated",
                );
                // Optimistic order stays either way; a failure is
                // reconciled by the next refetch
                list.update(|l| l.settle());
                store_push_toast(&store, outcome.toast_level(), outcome.message);
            });
        },
    );

    // ========================
    // Delete flow
    // ========================
    let (modal_open, set_modal_open) = signal(false);
    let (selected_id, set_selected_id) = signal(None::<String>);
    let (selected_title, set_selected_title) = signal(None::<String>);

    let on_delete_confirm = move |_| {
        let Some(id) = selected_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let outcome =
                ActionOutcome::from_result(api::delete_project(&id).await, "Project deleted");
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
    let categories = Signal::derive(move || category_options(list.get().items()));
    let drag_locked = move || criteria.get().narrows();
    let page_signal = Signal::derive(move || query.get().page());

    view! {
        <div class="table-screen">
            <div class="screen-header">
                <h1>"All Projects"</h1>
                <button class="primary-btn" on:click=move |_| ctx.navigate(Route::AddProject)>
                    "Add Project"
                </button>
            </div>

            <FilterBar query=query categories=categories />
            <Show when=drag_locked>
                <p class="drag-locked-note">"Reordering is disabled while filters are active."</p>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Image"</th>
                        <th>"Project Title"</th>
                        <th>"Project Type"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !rows().is_empty() fallback=move || view! {
                        <tr><td colspan="4" class="empty-state">{move || if loading.get() { "Loading..." } else { "No results." }}</td></tr>
                    }>
                        <For
                            each=rows
                            key=|p| (p.id.clone(), p.order)
                            children=move |project| {
                                let id = project.id.clone();
                                let edit_id = project.id.clone();
                                let title = project.title.clone();
                                let live_link = project.live_link.clone();
                                let image = project.image_urls.first().cloned();
                                let on_mousedown = make_on_row_mousedown(dnd, id.clone());
                                let row_id = id.clone();
                                let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(row_id.as_str());
                                view! {
                                    <tr
                                        data-sort-row="projects"
                                        class:dragging=is_dragging
                                        on:mousedown=on_mousedown
                                    >
                                        <td>
                                            {image.map(|src| view! { <img class="row-thumb" src=src /> })}
                                        </td>
                                        <td class="cell-title">{project.title.clone()}</td>
                                        <td>{project.project_type.clone()}</td>
                                        <td class="cell-actions">
                                            <button
                                                title="View Live"
                                                on:click=move |_| {
                                                    if let Some(win) = web_sys::window() {
                                                        let _ = win.open_with_url_and_target(&live_link, "_blank");
                                                    }
                                                }
                                            >
                                                "View"
                                            </button>
                                            <button
                                                title="Edit"
                                                on:click=move |_| ctx.navigate(Route::EditProject(edit_id.clone()))
                                            >
                                                "Edit"
                                            </button>
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
