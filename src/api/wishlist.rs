//! Wishlist Mutations
//!
//! Frontend binding for the wishlist toggle endpoint.

use crate::models::{MutationResponse, WishlistToggleRequest};
use crate::store::AppStore;
use crate::toast::Toasts;

use super::{failure_message, post_json, ApiError};

const WISHLIST_TOGGLE_URL: &str = "/api/wishlist/toggle/";

/// Toast text keyed on the server's `added` verdict.
pub fn wishlist_message(added: Option<bool>) -> &'static str {
    if added == Some(true) {
        "Added to wishlist"
    } else {
        "Removed from wishlist"
    }
}

/// Toggle a product's wishlist membership and toast the outcome.
///
/// The returned envelope's `added` flag is the authoritative button state;
/// callers must follow it rather than flip local state ahead of the server.
pub async fn toggle_wishlist(
    store: AppStore,
    toasts: Toasts,
    product_id: &str,
) -> Result<MutationResponse, ApiError> {
    let result = post_json(store, WISHLIST_TOGGLE_URL, &WishlistToggleRequest { product_id }).await;
    match &result {
        Ok(envelope) if envelope.success => toasts.success(wishlist_message(envelope.added)),
        Ok(envelope) => toasts.error(failure_message(envelope)),
        Err(error) => toasts.error(error.user_message()),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::wishlist_message;

    #[test]
    fn test_added_message() {
        assert_eq!(wishlist_message(Some(true)), "Added to wishlist");
    }

    #[test]
    fn test_removed_message() {
        assert_eq!(wishlist_message(Some(false)), "Removed from wishlist");
    }

    #[test]
    fn test_missing_flag_reads_as_removed() {
        assert_eq!(wishlist_message(None), "Removed from wishlist");
    }
}
