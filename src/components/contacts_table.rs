//! Contacts Table Screen
//!
//! Incoming contact messages with per-row status updates and delete.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::ActionOutcome;
use crate::api;
use crate::components::{DeleteConfirmModal, FilterBar, Pagination};
use crate::context::use_app_context;
use crate::models::{Contact, ContactStatus, ListMeta};
use crate::projection::{project, FilterCriteria, SortMode};
use crate::query;
use crate::store::{
    store_push_toast, store_resolve_toast, use_app_store, ToastLevel,
};

#[component]
pub fn ContactsTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let query = RwSignal::new(query::from_location());
    let criteria = Memo::new(move |_| FilterCriteria::from_query(&query.get()));
    let (contacts, set_contacts) = signal(Vec::<Contact>::new());
    let (meta, set_meta) = signal(ListMeta::default());
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let q = query.get();
        set_loading.set(true);
        spawn_local(async move {
            let page = api::get_all_contacts(&q).await;
            set_meta.set(page.meta);
            set_contacts.set(page.items);
            set_loading.set(false);
            let count = page.meta.page_count();
            if query.get_untracked().page() > count {
                query.update(|q| q.clamp_page(count));
                query::sync_to_url(&query.get_untracked());
            }
        });
    });

    let on_status_change = move |id: String, raw: String| {
        let Some(status) = ContactStatus::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == raw)
        else {
            return;
        };
        spawn_local(async move {
            let toast_id =
                store_push_toast(&store, ToastLevel::Loading, "Updating status...".to_string());
            let outcome = ActionOutcome::from_result(
                api::update_contact_status(&id, status).await,
                "Status updated",
            );
            store_resolve_toast(&store, toast_id, outcome.toast_level(), outcome.message.clone());
            if outcome.success {
                ctx.reload();
            }
        });
    };

    let (modal_open, set_modal_open) = signal(false);
    let (selected_id, set_selected_id) = signal(None::<String>);
    let (selected_name, set_selected_name) = signal(None::<String>);

    let on_delete_confirm = move |_| {
        let Some(id) = selected_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let outcome =
                ActionOutcome::from_result(api::delete_contact(&id).await, "Message deleted");
            store_push_toast(&store, outcome.toast_level(), outcome.message.clone());
            if outcome.success {
                set_modal_open.set(false);
                ctx.reload();
            }
        });
    };

    let rows = move || {
        project(
            &contacts.get(),
            &criteria.get(),
            SortMode::CreatedAtDesc,
            Utc::now(),
        )
    };
    let statuses: Vec<&'static str> =
        ContactStatus::ALL.iter().map(|s| s.as_str()).collect();
    let page_signal = Signal::derive(move || query.get().page());

    view! {
        <div class="table-screen">
            <div class="screen-header">
                <h1>"Manage Messages"</h1>
            </div>

            <FilterBar query=query statuses=statuses />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Subject"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || !rows().is_empty() fallback=move || view! {
                        <tr><td colspan="6" class="empty-state">{move || if loading.get() { "Loading..." } else { "No results." }}</td></tr>
                    }>
                        <For
                            each=rows
                            key=|c| (c.id.clone(), c.status)
                            children=move |contact| {
                                let id = contact.id.clone();
                                let name = contact.name.clone();
                                let status_id = contact.id.clone();
                                let current = contact.status;
                                let date = contact
                                    .created_at
                                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{contact.name.clone()}</td>
                                        <td>{contact.email.clone()}</td>
                                        <td class="cell-subject" title=contact.message.clone()>
                                            {contact.subject.clone()}
                                        </td>
                                        <td>{date}</td>
                                        <td>
                                            <select
                                                class="status-select"
                                                on:change=move |ev| {
                                                    on_status_change(
                                                        status_id.clone(),
                                                        event_target_value(&ev),
                                                    );
                                                }
                                            >
                                                {ContactStatus::ALL
                                                    .iter()
                                                    .map(|s| {
                                                        view! {
                                                            <option
                                                                value=s.as_str()
                                                                selected=*s == current
                                                            >
                                                                {s.as_str()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td class="cell-actions">
                                            <button
                                                class="danger"
                                                title="Delete"
                                                on:click=move |_| {
                                                    set_selected_id.set(Some(id.clone()));
                                                    set_selected_name.set(Some(name.clone()));
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
                name=selected_name
                on_confirm=on_delete_confirm
                on_cancel=move |_| set_modal_open.set(false)
            />
        </div>
    }
}
