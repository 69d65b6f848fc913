//! Image Uploader Component
//!
//! File input with a local FileReader preview; the file itself is
//! forwarded to the backend's upload endpoint, and the hosted URL is
//! handed back to the form on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api;
use crate::store::{store_push_toast, use_app_store, ToastLevel};

#[component]
pub fn ImageUploader(
    #[prop(into)] label: String,
    /// Currently attached image, if any
    current: Signal<Option<String>>,
    #[prop(into)] on_uploaded: Callback<String>,
) -> impl IntoView {
    let store = use_app_store();
    let (preview, set_preview) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap().clone();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // Local preview while the upload runs
        if let Ok(reader) = web_sys::FileReader::new() {
            let reader_for_load = reader.clone();
            let onload = Closure::<dyn FnMut()>::new(move || {
                if let Ok(result) = reader_for_load.result() {
                    if let Some(data_url) = result.as_string() {
                        set_preview.set(Some(data_url));
                    }
                }
            });
            reader.set_onloadend(Some(onload.as_ref().unchecked_ref()));
            onload.forget();
            let _ = reader.read_as_data_url(&file);
        }

        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_image(&file).await {
                Ok(url) => {
                    on_uploaded.run(url);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[UPLOAD] failed: {}", e).into());
                    store_push_toast(&store, ToastLevel::Error, format!("Upload failed: {}", e));
                }
            }
            set_uploading.set(false);
            input.set_value("");
        });
    };

    let shown_image = move || preview.get().or_else(|| current.get());

    view! {
        <div class="image-uploader">
            <label class="field-label">{label}</label>
            {move || shown_image().map(|src| view! {
                <img class="image-preview" src=src />
            })}
            <input type="file" accept="image/*" on:change=on_change />
            <Show when=move || uploading.get()>
                <span class="uploading-note">"Uploading..."</span>
            </Show>
        </div>
    }
}
