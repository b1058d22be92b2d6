//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The cart count
//! lives here and nowhere else; badge elements are pure render targets
//! recomputed from it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CartLine, MutationResponse, Product, StorefrontData};

/// Element id of the JSON payload the server embeds per page
const PAGE_DATA_ID: &str = "storefront-data";

/// Attribute on `<body>` carrying the server-rendered cart count
const CART_COUNT_ATTR: &str = "data-cart-count";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cart item count, sourced exclusively from the server
    pub cart_count: u32,
    /// Products embedded on the current page
    pub products: Vec<Product>,
    /// Cart lines embedded on the cart page
    pub cart_items: Vec<CartLine>,
}

impl AppState {
    /// Seed state from what the server rendered into the page.
    pub fn from_page() -> Self {
        let data = read_page_data().unwrap_or_default();
        Self {
            cart_count: initial_cart_count(),
            products: data.products,
            cart_items: data.cart_items,
        }
    }
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

/// Counter value after applying a mutation envelope.
///
/// An envelope without `cart_count` leaves the display unchanged.
pub fn reconciled_count(current: u32, envelope: &MutationResponse) -> u32 {
    envelope.cart_count.unwrap_or(current)
}

/// Apply a mutation envelope to the store.
pub fn store_apply_envelope(store: &AppStore, envelope: &MutationResponse) {
    let binding = store.cart_count();
    let mut count = binding.write();
    *count = reconciled_count(*count, envelope);
}

/// Current badge value (reactive when read inside a tracking context)
pub fn store_cart_count(store: &AppStore) -> u32 {
    store.cart_count().get()
}

pub fn store_products(store: &AppStore) -> Vec<Product> {
    store.products().get()
}

pub fn store_cart_items(store: &AppStore) -> Vec<CartLine> {
    store.cart_items().get()
}

// ========================
// Page Seeding
// ========================

/// Cart count from the body attribute, as the server rendered it.
fn initial_cart_count() -> u32 {
    let attr = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute(CART_COUNT_ATTR));
    parse_cart_count(attr.as_deref())
}

/// Parse the body attribute; anything unreadable counts as zero.
pub fn parse_cart_count(attr: Option<&str>) -> u32 {
    attr.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0)
}

fn read_page_data() -> Option<StorefrontData> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(PAGE_DATA_ID)?;
    let raw = element.text_content()?;
    match serde_json::from_str(&raw) {
        Ok(data) => Some(data),
        Err(error) => {
            web_sys::console::warn_1(&format!("[STORE] bad page payload: {error}").into());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_cart_count, reconciled_count};
    use crate::models::MutationResponse;

    fn envelope_with_count(count: Option<u32>) -> MutationResponse {
        MutationResponse {
            success: true,
            cart_count: count,
            ..Default::default()
        }
    }

    #[test]
    fn test_count_follows_envelope() {
        assert_eq!(reconciled_count(0, &envelope_with_count(Some(3))), 3);
        assert_eq!(reconciled_count(9, &envelope_with_count(Some(0))), 0);
    }

    #[test]
    fn test_missing_count_keeps_display() {
        assert_eq!(reconciled_count(7, &envelope_with_count(None)), 7);
    }

    #[test]
    fn test_last_arrival_wins() {
        // Two in-flight mutations: the envelope that resolves last owns the
        // badge, regardless of issue order.
        let mut count = 2;
        count = reconciled_count(count, &envelope_with_count(Some(5)));
        count = reconciled_count(count, &envelope_with_count(Some(3)));
        assert_eq!(count, 3);
    }

    #[test]
    fn test_parse_cart_count() {
        assert_eq!(parse_cart_count(Some("4")), 4);
        assert_eq!(parse_cart_count(Some(" 12 ")), 12);
        assert_eq!(parse_cart_count(Some("nope")), 0);
        assert_eq!(parse_cart_count(None), 0);
    }
}
