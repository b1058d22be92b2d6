//! Cart Mutations
//!
//! Frontend bindings for the cart endpoints.

use crate::models::{CartAction, CartAddRequest, CartUpdateRequest, MutationResponse};
use crate::store::AppStore;
use crate::toast::Toasts;

use super::{failure_message, post_json, ApiError};

const CART_ADD_URL: &str = "/api/cart/add/";
const CART_UPDATE_URL: &str = "/api/cart/update/";

/// Add a product to the cart and toast the outcome.
///
/// The badge picks up the envelope's `cart_count` inside `post_json`; this
/// wrapper only decides what the visitor is told.
pub async fn add_to_cart(
    store: AppStore,
    toasts: Toasts,
    request: &CartAddRequest<'_>,
) -> Result<MutationResponse, ApiError> {
    let result = post_json(store, CART_ADD_URL, request).await;
    match &result {
        Ok(envelope) if envelope.success => toasts.success("Added to cart!"),
        Ok(envelope) => toasts.error(failure_message(envelope)),
        Err(error) => toasts.error(error.user_message()),
    }
    result
}

/// Adjust a cart line's quantity.
///
/// Successful adjustments stay quiet; the badge resync is the feedback.
/// Failures toast.
pub async fn update_cart(
    store: AppStore,
    toasts: Toasts,
    item_id: u32,
    action: CartAction,
) -> Result<MutationResponse, ApiError> {
    let result = post_json(store, CART_UPDATE_URL, &CartUpdateRequest { item_id, action }).await;
    match &result {
        Ok(envelope) if !envelope.success => toasts.error(failure_message(envelope)),
        Ok(_) => {}
        Err(error) => toasts.error(error.user_message()),
    }
    result
}
