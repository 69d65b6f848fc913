//! Delete Confirmation Modal
//!
//! Gates every destructive row action behind an explicit confirm. The
//! caller owns the open/close state so a failed delete can keep the
//! modal open for retry or cancel.

use leptos::prelude::*;

/// Confirmation dialog naming the row about to be removed
#[component]
pub fn DeleteConfirmModal(
    open: ReadSignal<bool>,
    /// Display name of the row pending deletion
    name: ReadSignal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Delete?"</h2>
                    <p>
                        "This will permanently remove "
                        <strong>{move || name.get().unwrap_or_else(|| "this item".to_string())}</strong>
                        "."
                    </p>
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="confirm-btn danger" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
