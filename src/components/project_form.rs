//! Project Create / Edit Form
//!
//! One form for both flows. When `id` is set the existing project is
//! loaded and saved with a PATCH, otherwise submit creates a new one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{modal_stays_open, ActionOutcome};
use crate::api;
use crate::components::ImageUploader;
use crate::context::{use_app_context, Route};
use crate::models::Project;
use crate::store::{store_push_toast, use_app_store};

#[component]
pub fn ProjectForm(#[prop(optional, into)] id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let editing = id.is_some();

    let (title, set_title) = signal(String::new());
    let (project_type, set_project_type) = signal(String::new());
    let (details, set_details) = signal(String::new());
    let (technologies, set_technologies) = signal(String::new());
    let (live_link, set_live_link) = signal(String::new());
    let (client_github, set_client_github) = signal(String::new());
    let (server_github, set_server_github) = signal(String::new());
    let (image_urls, set_image_urls) = signal(Vec::<String>::new());
    let (order, set_order) = signal(0i32);

    let (title_err, set_title_err) = signal(None::<&'static str>);
    let (details_err, set_details_err) = signal(None::<&'static str>);
    let (link_err, set_link_err) = signal(None::<&'static str>);
    let (saving, set_saving) = signal(false);

    let load_id = id.clone();
    if let Some(pid) = load_id {
        spawn_local(async move {
            match api::get_single_project(&pid).await.ok().flatten() {
                Some(p) => {
                    set_title.set(p.title);
                    set_project_type.set(p.project_type);
                    set_details.set(p.details);
                    set_technologies.set(p.technologies.join(", "));
                    set_live_link.set(p.live_link);
                    set_client_github.set(p.client_github_link);
                    set_server_github.set(p.server_github_link.unwrap_or_default());
                    set_image_urls.set(p.image_urls);
                    set_order.set(p.order);
                }
                None => {
                    store_push_toast(
                        &store,
                        crate::store::ToastLevel::Error,
                        "Project not found".to_string(),
                    );
                    ctx.navigate(Route::Projects);
                }
            }
        });
    }

    let validate = move || {
        let mut ok = true;
        if title.get_untracked().trim().is_empty() {
            set_title_err.set(Some("Title is required"));
            ok = false;
        } else {
            set_title_err.set(None);
        }
        if details.get_untracked().trim().is_empty() {
            set_details_err.set(Some("Details are required"));
            ok = false;
        } else {
            set_details_err.set(None);
        }
        if live_link.get_untracked().trim().is_empty() {
            set_link_err.set(Some("Live link is required"));
            ok = false;
        } else {
            set_link_err.set(None);
        }
        ok
    };

    let save_id = id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !validate() || saving.get_untracked() {
            return;
        }
        let project = Project {
            id: save_id.clone().unwrap_or_default(),
            title: title.get_untracked().trim().to_string(),
            project_type: project_type.get_untracked().trim().to_string(),
            details: details.get_untracked(),
            technologies: technologies
                .get_untracked()
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            live_link: live_link.get_untracked().trim().to_string(),
            client_github_link: client_github.get_untracked().trim().to_string(),
            server_github_link: {
                let s = server_github.get_untracked().trim().to_string();
                (!s.is_empty()).then_some(s)
            },
            image_urls: image_urls.get_untracked(),
            order: order.get_untracked(),
            created_at: None,
        };
        let edit_id = save_id.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::update_project(&id, &project).await,
                None => api::create_project(&project).await,
            };
            let fallback = if editing { "Project updated" } else { "Project created" };
            let outcome = ActionOutcome::from_result(result, fallback);
            set_saving.set(false);
            store_push_toast(&store, outcome.toast_level(), outcome.message.clone());
            if !modal_stays_open(&outcome) {
                ctx.reload();
                ctx.navigate(Route::Projects);
            }
        });
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <h1>{if editing { "Edit Project" } else { "Add Project" }}</h1>

            <label class="form-field">
                <span>"Title"</span>
                <input
                    type="text"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || title_err.get().map(|e| view! { <span class="field-error">{e}</span> })}
            </label>

            <label class="form-field">
                <span>"Project Type"</span>
                <input
                    type="text"
                    placeholder="e.g. Full Stack"
                    prop:value=project_type
                    on:input=move |ev| set_project_type.set(event_target_value(&ev))
                />
            </label>

            <label class="form-field">
                <span>"Details"</span>
                <textarea
                    rows="6"
                    prop:value=details
                    on:input=move |ev| set_details.set(event_target_value(&ev))
                ></textarea>
                {move || details_err.get().map(|e| view! { <span class="field-error">{e}</span> })}
            </label>

            <label class="form-field">
                <span>"Technologies (comma separated)"</span>
                <input
                    type="text"
                    placeholder="rust, leptos, mongodb"
                    prop:value=technologies
                    on:input=move |ev| set_technologies.set(event_target_value(&ev))
                />
            </label>

            <label class="form-field">
                <span>"Live Link"</span>
                <input
                    type="url"
                    prop:value=live_link
                    on:input=move |ev| set_live_link.set(event_target_value(&ev))
                />
                {move || link_err.get().map(|e| view! { <span class="field-error">{e}</span> })}
            </label>

            <label class="form-field">
                <span>"Client GitHub"</span>
                <input
                    type="url"
                    prop:value=client_github
                    on:input=move |ev| set_client_github.set(event_target_value(&ev))
                />
            </label>

            <label class="form-field">
                <span>"Server GitHub (optional)"</span>
                <input
                    type="url"
                    prop:value=server_github
                    on:input=move |ev| set_server_github.set(event_target_value(&ev))
                />
            </label>

            <ImageUploader
                label="Project Image".to_string()
                current=Signal::derive(move || image_urls.get().first().cloned())
                on_uploaded=move |url: String| set_image_urls.update(|v| v.insert(0, url))
            />

            <div class="form-actions">
                <button type="submit" class="primary-btn" disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save Project" }}
                </button>
                <button
                    type="button"
                    on:click=move |_| ctx.navigate(Route::Projects)
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
