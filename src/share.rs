//! Share-link retrieval and clipboard copy.
//!
//! The confirmation only shows after the clipboard write itself
//! resolves; a denied clipboard permission stays silent, matching the
//! page's original behaviour.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use serde::Deserialize;

use crate::net::api::{self, ApiError};

/// Response body of the share endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ShareLink {
    pub link: String,
}

/// Derive the endpoint path for fetching a post's share link.
pub fn share_path(post_id: &str) -> String {
    format!("/post/{post_id}/share")
}

/// Fetch the share link for a post.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the underlying request.
pub async fn fetch(post_id: &str) -> Result<ShareLink, ApiError> {
    api::get_json(&share_path(post_id)).await
}

/// Write `text` to the system clipboard. Resolves once the browser
/// confirms the write; a denied permission surfaces as `Err`.
///
/// # Errors
///
/// Returns the rejection value of the clipboard promise.
#[cfg(feature = "browser")]
pub async fn copy_to_clipboard(text: &str) -> Result<(), wasm_bindgen::JsValue> {
    let Some(window) = web_sys::window() else {
        return Err(wasm_bindgen::JsValue::from_str("no window"));
    };
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ())
}
