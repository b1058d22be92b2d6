//! Storefront API Layer
//!
//! Fetch wrappers for the mutation endpoints, organized by domain. Every
//! request is a single POST carrying the CSRF token; the JSON envelope that
//! comes back is applied to the app store before the caller sees it.

mod cart;
mod order;
mod wishlist;

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::cookies;
use crate::models::MutationResponse;
use crate::store::{store_apply_envelope, AppStore};

// Re-export all public items
pub use cart::*;
pub use order::*;
pub use wishlist::*;

/// Cookie the backend issues its CSRF token under
pub const CSRF_COOKIE: &str = "csrftoken";

/// How a mutation can fail before the caller sees an envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response was received
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not valid JSON
    #[error("malformed response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Short text suitable for a toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Network error. Please try again.",
            ApiError::Parse(_) => "Unexpected response from the server.",
        }
    }
}

/// Toast text for an envelope that decoded but reports failure.
pub fn failure_message(envelope: &MutationResponse) -> String {
    envelope
        .error
        .clone()
        .unwrap_or_else(|| "Something went wrong. Please try again.".to_string())
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// POST `payload` as JSON to `url` and decode the response envelope.
///
/// The request carries `Content-Type: application/json` plus `X-CSRFToken`
/// read from the cookie at call time; when the cookie is absent the header is
/// omitted rather than sent stale. If the decoded envelope carries
/// `cart_count` the store is updated before returning, so every badge
/// re-renders. The envelope is returned regardless of its `success` flag;
/// callers decide success semantics.
///
/// No retry, no timeout, no de-duplication: concurrent calls resolve in
/// arrival order and the last arrival owns the counter.
pub async fn post_json<T: Serialize>(
    store: AppStore,
    url: &str,
    payload: &T,
) -> Result<MutationResponse, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Network(e.to_string()))?;

    let headers = Headers::new().map_err(|e| ApiError::Network(js_message(&e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    if let Some(token) = cookies::get(CSRF_COOKIE) {
        headers
            .set("X-CSRFToken", &token)
            .map_err(|e| ApiError::Network(js_message(&e)))?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(url, &init).map_err(|e| ApiError::Network(js_message(&e)))?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ApiError::Network(js_message(&e)))?;

    let json_promise = response.json().map_err(|e| ApiError::Parse(js_message(&e)))?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|e| ApiError::Parse(js_message(&e)))?;
    let envelope: MutationResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Parse(e.to_string()))?;

    store_apply_envelope(&store, &envelope);
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::{failure_message, ApiError};
    use crate::models::MutationResponse;

    #[test]
    fn test_failure_message_prefers_server_text() {
        let envelope = MutationResponse {
            error: Some("Cart is empty".to_string()),
            ..Default::default()
        };
        assert_eq!(failure_message(&envelope), "Cart is empty");
    }

    #[test]
    fn test_failure_message_fallback() {
        let envelope = MutationResponse::default();
        assert_eq!(failure_message(&envelope), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_user_message_by_variant() {
        assert_eq!(
            ApiError::Network("offline".to_string()).user_message(),
            "Network error. Please try again."
        );
        assert_eq!(
            ApiError::Parse("trailing garbage".to_string()).user_message(),
            "Unexpected response from the server."
        );
    }
}
