//! Frontend Models
//!
//! Wire types shared with the storefront backend.

use serde::{Deserialize, Serialize};

/// Envelope returned by every mutation endpoint.
///
/// The client trusts it as-is: unknown fields are ignored, absent fields fall
/// back to their defaults, and there is no schema validation beyond the JSON
/// decode itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    /// Server-side cart total; the badge follows this and nothing else
    pub cart_count: Option<u32>,
    /// Wishlist membership after a toggle
    pub added: Option<bool>,
    pub error: Option<String>,
    pub order_number: Option<String>,
}

/// Cart line addition (POST /api/cart/add/)
#[derive(Debug, Clone, Serialize)]
pub struct CartAddRequest<'a> {
    pub product_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Quantity adjustment on an existing cart line (POST /api/cart/update/)
#[derive(Debug, Clone, Serialize)]
pub struct CartUpdateRequest {
    pub item_id: u32,
    pub action: CartAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Increase,
    Decrease,
    Remove,
}

/// Wishlist membership toggle (POST /api/wishlist/toggle/)
#[derive(Debug, Clone, Serialize)]
pub struct WishlistToggleRequest<'a> {
    pub product_id: &'a str,
}

/// Checkout details (POST /api/order/place/)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub payment_method: String,
}

/// Product data embedded by the server into the page payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub image: String,
    pub rating: f32,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub badge: String,
    /// Whether this product is already on the visitor's wishlist
    #[serde(default)]
    pub wishlisted: bool,
}

/// One server-side cart line, as embedded on the cart page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: u32,
    pub product_name: String,
    pub price: f64,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

/// Page payload the server renders into its json_script block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorefrontData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub cart_items: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ignores_unknown_fields() {
        let envelope: MutationResponse =
            serde_json::from_str(r#"{"success": true, "cart_count": 3, "debug_id": "x9"}"#)
                .expect("decode failed");
        assert!(envelope.success);
        assert_eq!(envelope.cart_count, Some(3));
        assert_eq!(envelope.added, None);
    }

    #[test]
    fn test_envelope_missing_success_reads_as_failure() {
        let envelope: MutationResponse = serde_json::from_str("{}").expect("decode failed");
        assert!(!envelope.success);
        assert_eq!(envelope.cart_count, None);
    }

    #[test]
    fn test_cart_add_request_omits_absent_options() {
        let request = CartAddRequest {
            product_id: "17",
            size: None,
            color: None,
            quantity: Some(2),
        };
        let json = serde_json::to_string(&request).expect("encode failed");
        assert_eq!(json, r#"{"product_id":"17","quantity":2}"#);
    }

    #[test]
    fn test_cart_action_serializes_lowercase() {
        let request = CartUpdateRequest { item_id: 4, action: CartAction::Decrease };
        let json = serde_json::to_string(&request).expect("encode failed");
        assert_eq!(json, r#"{"item_id":4,"action":"decrease"}"#);
    }

    #[test]
    fn test_page_payload_defaults_to_empty() {
        let data: StorefrontData = serde_json::from_str("{}").expect("decode failed");
        assert!(data.products.is_empty());
        assert!(data.cart_items.is_empty());
    }
}
