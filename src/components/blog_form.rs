//! Blog Create / Edit Form
//!
//! Markdown content with a live rendered preview pane.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{modal_stays_open, ActionOutcome};
use crate::api;
use crate::components::ImageUploader;
use crate::context::{use_app_context, Route};
use crate::markdown::parse_markdown;
use crate::models::{Blog, BlogMeta, BlogStatus};
use crate::store::{store_push_toast, use_app_store};

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[component]
pub fn BlogForm(#[prop(optional, into)] id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let editing = id.is_some();

    let (title, set_title) = signal(String::new());
    let (slug, set_slug) = signal(String::new());
    let (slug_touched, set_slug_touched) = signal(false);
    let (category, set_category) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (summary, set_summary) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (status, set_status) = signal(BlogStatus::Draft);
    let (featured_image, set_featured_image) = signal(None::<String>);
    let (show_preview, set_show_preview) = signal(false);

    let (title_err, set_title_err) = signal(None::<&'static str>);
    let (content_err, set_content_err) = signal(None::<&'static str>);
    let (saving, set_saving) = signal(false);

    let load_id = id.clone();
    if let Some(bid) = load_id {
        spawn_local(async move {
            match api::get_single_blog(&bid).await.ok().flatten() {
                Some(b) => {
                    set_title.set(b.title);
                    set_slug.set(b.slug);
                    set_slug_touched.set(true);
                    set_category.set(b.category.unwrap_or_default());
                    set_tags.set(b.tags.join(", "));
                    set_summary.set(b.summary.unwrap_or_default());
                    set_content.set(b.content);
                    set_status.set(b.status);
                    set_featured_image.set(b.featured_image);
                }
                None => {
                    store_push_toast(
                        &store,
                        crate::store::ToastLevel::Error,
                        "Blog not found".to_string(),
                    );
                    ctx.navigate(Route::Blogs);
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
        if content.get_untracked().trim().is_empty() {
            set_content_err.set(Some("Content is required"));
            ok = false;
        } else {
            set_content_err.set(None);
        }
        ok
    };

    let save_id = id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !validate() || saving.get_untracked() {
            return;
        }
        let blog = Blog {
            id: save_id.clone().unwrap_or_default(),
            title: title.get_untracked().trim().to_string(),
            slug: {
                let s = slug.get_untracked().trim().to_string();
                if s.is_empty() {
                    slugify(&title.get_untracked())
                } else {
                    s
                }
            },
            content: content.get_untracked(),
            summary: {
                let s = summary.get_untracked().trim().to_string();
                (!s.is_empty()).then_some(s)
            },
            featured_image: featured_image.get_untracked(),
            tags: tags
                .get_untracked()
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            category: {
                let c = category.get_untracked().trim().to_string();
                (!c.is_empty()).then_some(c)
            },
            status: status.get_untracked(),
            meta: BlogMeta::default(),
            created_at: None,
        };
        let edit_id = save_id.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::update_blog(&id, &blog).await,
                None => api::create_blog(&blog).await,
            };
            let fallback = if editing { "Blog updated" } else { "Blog created" };
            let outcome = ActionOutcome::from_result(result, fallback);
            set_saving.set(false);
            store_push_toast(&store, outcome.toast_level(), outcome.message.clone());
            if !modal_stays_open(&outcome) {
                ctx.reload();
                ctx.navigate(Route::Blogs);
            }
        });
    };

    view! {
        <form class="entity-form blog-form" on:submit=on_submit>
            <h1>{if editing { "Edit Blog" } else { "Add Blog" }}</h1>

            <label class="form-field">
                <span>"Title"</span>
                <input
                    type="text"
                    prop:value=title
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        if !slug_touched.get_untracked() {
                            set_slug.set(slugify(&v));
                        }
                        set_title.set(v);
                    }
                />
                {move || title_err.get().map(|e| view! { <span class="field-error">{e}</span> })}
            </label>

            <label class="form-field">
                <span>"Slug"</span>
                <input
                    type="text"
                    prop:value=slug
                    on:input=move |ev| {
                        set_slug_touched.set(true);
                        set_slug.set(event_target_value(&ev));
                    }
                />
            </label>

            <div class="form-row">
                <label class="form-field">
                    <span>"Category"</span>
                    <input
                        type="text"
                        placeholder="e.g. Web Development"
                        prop:value=category
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Status"</span>
                    <select on:change=move |ev| {
                        let v = event_target_value(&ev);
                        set_status.set(if v == "published" {
                            BlogStatus::Published
                        } else {
                            BlogStatus::Draft
                        });
                    }>
                        <option value="draft" selected=move || status.get() == BlogStatus::Draft>
                            "draft"
                        </option>
                        <option value="published" selected=move || status.get() == BlogStatus::Published>
                            "published"
                        </option>
                    </select>
                </label>
            </div>

            <label class="form-field">
                <span>"Tags (comma separated)"</span>
                <input
                    type="text"
                    prop:value=tags
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </label>

            <label class="form-field">
                <span>"Summary"</span>
                <textarea
                    rows="3"
                    prop:value=summary
                    on:input=move |ev| set_summary.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="form-field">
                <div class="editor-toolbar">
                    <span>"Content (markdown)"</span>
                    <button
                        type="button"
                        on:click=move |_| set_show_preview.update(|v| *v = !*v)
                    >
                        {move || if show_preview.get() { "Edit" } else { "Preview" }}
                    </button>
                </div>
                <Show
                    when=move || show_preview.get()
                    fallback=move || view! {
                        <textarea
                            rows="16"
                            prop:value=content
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                        ></textarea>
                    }
                >
                    <div
                        class="markdown-preview"
                        inner_html=move || parse_markdown(&content.get())
                    ></div>
                </Show>
                {move || content_err.get().map(|e| view! { <span class="field-error">{e}</span> })}
            </div>

            <ImageUploader
                label="Featured Image".to_string()
                current=Signal::derive(move || featured_image.get())
                on_uploaded=move |url: String| set_featured_image.set(Some(url))
            />

            <div class="form-actions">
                <button type="submit" class="primary-btn" disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save Blog" }}
                </button>
                <button type="button" on:click=move |_| ctx.navigate(Route::Blogs)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Rust & WASM: a tour!"), "rust-wasm-a-tour");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("   "), "");
    }
}
