//! Toast Host Component
//!
//! Fixed overlay rendering the store's toast queue. Non-loading toasts
//! auto-dismiss after a few seconds; loading toasts stay until resolved.

use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields, Toast, ToastLevel};

const DISMISS_AFTER_MS: u32 = 4000;

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast success",
        ToastLevel::Error => "toast error",
        ToastLevel::Warning => "toast warning",
        ToastLevel::Loading => "toast loading",
    }
}

/// Toast overlay, mounted once in the app shell
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    // Toast ids that already have a dismiss timer running
    let scheduled = StoredValue::new(HashSet::<u32>::new());

    Effect::new(move |_| {
        let toasts: Vec<Toast> = store.toasts().get();
        for toast in toasts {
            if toast.level == ToastLevel::Loading {
                continue;
            }
            let is_new = scheduled.with_value(|s| !s.contains(&toast.id));
            if is_new {
                scheduled.update_value(|s| {
                    s.insert(toast.id);
                });
                let id = toast.id;
                spawn_local(async move {
                    TimeoutFuture::new(DISMISS_AFTER_MS).await;
                    store_dismiss_toast(&store, id);
                    scheduled.update_value(|s| {
                        s.remove(&id);
                    });
                });
            }
        }
    });

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| (toast.id, toast.level, toast.text.clone())
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=level_class(toast.level) on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
