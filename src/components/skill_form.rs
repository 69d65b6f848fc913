//! Inline Skill Create Form

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::ActionOutcome;
use crate::api;
use crate::components::ImageUploader;
use crate::context::use_app_context;
use crate::models::Skill;
use crate::store::{store_push_toast, use_app_store};

#[component]
pub fn SkillForm(#[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (logo, set_logo) = signal(None::<String>);
    let (title_err, set_title_err) = signal(None::<&'static str>);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if title.get_untracked().trim().is_empty() {
            set_title_err.set(Some("Skill name is required"));
            return;
        }
        set_title_err.set(None);
        let skill = Skill {
            id: String::new(),
            title: title.get_untracked().trim().to_string(),
            logo: logo.get_untracked().into_iter().collect(),
            order: 0,
            created_at: None,
        };
        set_saving.set(true);
        spawn_local(async move {
            let outcome =
                ActionOutcome::from_result(api::create_skill(&skill).await, "Skill created");
            set_saving.set(false);
            store_push_toast(&store, outcome.toast_level(), outcome.message.clone());
            if outcome.success {
                set_title.set(String::new());
                set_logo.set(None);
                ctx.reload();
                on_saved.run(());
            }
        });
    };

    view! {
        <form class="entity-form inline-form" on:submit=on_submit>
            <label class="form-field">
                <span>"Skill Name"</span>
                <input
                    type="text"
                    placeholder="e.g. Rust"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || title_err.get().map(|e| view! { <span class="field-error">{e}</span> })}
            </label>

            <ImageUploader
                label="Logo".to_string()
                current=Signal::derive(move || logo.get())
                on_uploaded=move |url: String| set_logo.set(Some(url))
            />

            <div class="form-actions">
                <button type="submit" class="primary-btn" disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Add Skill" }}
                </button>
            </div>
        </form>
    }
}
