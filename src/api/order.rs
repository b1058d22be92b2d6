//! Order Placement
//!
//! Frontend binding for the checkout endpoint.

use crate::models::{MutationResponse, OrderRequest};
use crate::store::AppStore;
use crate::toast::Toasts;

use super::{failure_message, post_json, ApiError};

const ORDER_PLACE_URL: &str = "/api/order/place/";

/// Confirmation text for a placed order.
pub fn order_message(order_number: Option<&str>) -> String {
    match order_number {
        Some(number) => format!("Order {number} placed!"),
        None => "Order placed!".to_string(),
    }
}

/// Submit checkout details and toast the outcome.
pub async fn place_order(
    store: AppStore,
    toasts: Toasts,
    request: &OrderRequest,
) -> Result<MutationResponse, ApiError> {
    let result = post_json(store, ORDER_PLACE_URL, request).await;
    match &result {
        Ok(envelope) if envelope.success => {
            toasts.success(order_message(envelope.order_number.as_deref()))
        }
        Ok(envelope) => toasts.error(failure_message(envelope)),
        Err(error) => toasts.error(error.user_message()),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::order_message;

    #[test]
    fn test_order_message_with_number() {
        assert_eq!(order_message(Some("AKV-493021")), "Order AKV-493021 placed!");
    }

    #[test]
    fn test_order_message_without_number() {
        assert_eq!(order_message(None), "Order placed!");
    }
}
