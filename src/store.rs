//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Table data is
//! owned by the individual screens; this store carries the cross-cutting
//! UI state, which is the toast queue.

use leptos::prelude::*;
use reactive_stores::Store;

/// Toast severity, drives styling and auto-dismiss
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    /// A request in flight; replaced in place when it resolves
    Loading,
}

/// One toast message
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub text: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Monotonic toast id source
    pub toast_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast, returning its id (used to resolve Loading toasts)
pub fn store_push_toast(store: &AppStore, level: ToastLevel, text: impl Into<String>) -> u32 {
    let id = {
        let seq_field = store.toast_seq();
        let mut seq = seq_field.write();
        *seq += 1;
        *seq
    };
    store.toasts().write().push(Toast {
        id,
        level,
        text: text.into(),
    });
    id
}

/// Replace a toast in place (loading -> resolved outcome)
pub fn store_resolve_toast(store: &AppStore, id: u32, level: ToastLevel, text: impl Into<String>) {
    let text = text.into();
    if let Some(toast) = store.toasts().write().iter_mut().find(|t| t.id == id) {
        toast.level = level;
        toast.text = text;
    }
}

/// Remove a toast by id
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|t| t.id != id);
}
