//! Blogs Table Screen
//!
//! Filterable blog list. Blogs are sorted newest-first and are not
//! drag-reorderable.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::ActionOutcome;
use crate::api;
use crate::components::{DeleteConfirmModal, FilterBar, Pagination};
use crate::context::{use_app_context, Route};
use crate::models::{Blog, ListMeta};
use crate::projection::{category_options, project, FilterCriteria, SortMode};
use crate::query;
use crate::store::{store_push_toast, use_app_store};

const STATUS_OPTIONS: &[&str] = &["draft", "published"];

#[component]
pub fn BlogsTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let query = RwSignal::new(query::from_location());
    let criteria = Memo::new(move |_| FilterCriteria::from_query(&query.get()));
    let (blogs, set_blogs) = signal(Vec::<Blog>::new());
    let (meta, set_meta) = signal(ListMeta::default());
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let q = query.get();
        set_loading.set(true);
        spawn_local(async move {
            let page = api::get_all_blogs(&q).await;
            set_meta.set(page.meta);
            set_blogs.set(page.items);
            set_loading.set(false);
            let count = page.meta.page_count();
            if query.get_untracked().page() > count {
                query.update(|q| q.clamp_page(count));
                query::sync_to_url(&query.get_untracked());
            }
        });
    });

    let (modal_open, set_modal_open) = signal(false);
    let (selected_id, set_selected_id) = signal(None::<String>);
    let (selected_title, set_selected_title) = signal(None::<String>);

    let on_delete_confirm = move |_| {
        let Some(id) = selected_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let outcome =
                ActionOutcome::from_result(api::delete_blog(&id).await, "Blog deleted");
            store_push_toast(&store, outcome.toast_level(), outcome.message.clone());
            if outcome.success {
                set_modal_open.set(false);
                ctx.reload();
            }
        });
    };

    let rows = move || {
        project(
            &blogs.get(),
            &criteria.get(),
            SortMode::CreatedAtDesc,
            Utc::now(),
        )
    };
    let categories = Signal::derive(move || category_options(&blogs.get()));
    let page_signal = Signal::derive(move || query.get().page());

    view! {
        <div class="table-screen">
            <div class="screen-header">
                <h1>"Manage Blogs"</h1>
                <button class="primary-btn" on:click=move |_| ctx.navigate(Route::AddBlog)>
                    "Add Blog"
                </button>
            </div>

            <FilterBar query=query categories=categories statuses=STATUS_OPTIONS.to_vec() />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Status"</th>
                        <th>"Views"</th>
                        <th>"Date"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !rows().is_empty() fallback=move || view! {
                        <tr><td colspan="6" class="empty-state">{move || if loading.get() { "Loading..." } else { "No results." }}</td></tr>
                    }>
                        <For
                            each=rows
                            key=|b| b.id.clone()
                            children=move |blog| {
                                let id = blog.id.clone();
                                let title = blog.title.clone();
                                let edit_id = blog.id.clone();
                                let status = blog.status;
                                let date = blog
                                    .created_at
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td class="cell-title">
                                            {blog.featured_image.clone().map(|src| view! {
                                                <img class="row-thumb" src=src />
                                            })}
                                            <span>{blog.title.clone()}</span>
                                        </td>
                                        <td>{blog.category.clone().unwrap_or_default()}</td>
                                        <td>
                                            <span class=move || format!("status-badge {}", status.as_str())>
                                                {status.as_str()}
                                            </span>
                                        </td>
                                        <td>{blog.meta.views}</td>
                                        <td>{date}</td>
                                        <td class="cell-actions">
                                            <button
                                                title="Edit"
                                                on:click=move |_| ctx.navigate(Route::EditBlog(edit_id.clone()))
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
