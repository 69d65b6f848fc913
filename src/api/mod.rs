//! REST API Bindings
//!
//! Frontend bindings to the portfolio backend, organized by entity.
//! All transport goes through the shared `request` helper; list reads
//! additionally normalize to a `ListPage` and degrade to the empty
//! fallback page instead of propagating errors into render code.

mod blogs;
mod contacts;
mod projects;
mod skills;
mod upload;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{ApiResponse, ListData, ListPage};
use crate::query::QueryState;

// Re-export all public items
pub use blogs::*;
pub use contacts::*;
pub use projects::*;
pub use skills::*;
pub use upload::*;

/// Backend base URL, overridable at build time
pub const API_BASE: &str = match option_env!("PORTFOLIO_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5000/api/v1",
};

/// Transport-level failures. Render code never sees these for reads;
/// mutations fold them into the `{success, message}` shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Result of a mutating call, still carrying the backend's envelope
pub type MutationResult = Result<ApiResponse<serde_json::Value>, ApiError>;

fn js_err(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// One fetch round trip: JSON in, JSON out
pub(crate) async fn request<B, T>(method: &str, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        opts.set_body(&JsValue::from_str(&json));
    }

    let url = format!("{}{}", API_BASE, path);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Network(js_err(e)))?;
    if body.is_some() {
        let _ = request.headers().set("Content-Type", "application/json");
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_err(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ApiError::Network(js_err(e)))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let json = JsFuture::from(response.json().map_err(|e| ApiError::Decode(js_err(e)))?)
        .await
        .map_err(|e| ApiError::Decode(js_err(e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// One paged list read. Always yields a page: a failed read logs and
/// falls back to the empty page so the table renders its empty state.
pub(crate) async fn fetch_list<T: DeserializeOwned>(entity: &str, query: &QueryState) -> ListPage<T> {
    let path = format!("/{}?{}", entity, query.to_query_string());
    match request::<(), ApiResponse<ListData<T>>>("GET", &path, None).await {
        Ok(res) => res
            .data
            .map(ListPage::from)
            .unwrap_or_else(ListPage::fallback),
        Err(e) => {
            web_sys::console::warn_1(&format!("[API] list {} failed: {}", entity, e).into());
            ListPage::fallback()
        }
    }
}
