//! Image Upload Endpoint
//!
//! Multipart upload, bypassing the JSON `request` helper.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::models::ApiResponse;

use super::{js_err, ApiError, API_BASE};

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// Upload one image file, returning the hosted URL
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(js_err(e)))?;
    form.append_with_blob("image", file)
        .map_err(|e| ApiError::Network(js_err(e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());

    let url = format!("{}/upload", API_BASE);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| ApiError::Network(js_err(e)))?;

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
    let res: ApiResponse<UploadData> =
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))?;
    res.data
        .map(|d| d.url)
        .ok_or_else(|| ApiError::Decode("upload response carried no url".to_string()))
}
