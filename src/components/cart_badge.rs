//! Cart Badge Component
//!
//! Displays the live cart count; hidden while the cart is empty.

use leptos::prelude::*;

use crate::store::{store_cart_count, use_app_store};

/// Badge is shown only for a nonzero count.
pub fn badge_display(count: u32) -> &'static str {
    if count > 0 {
        "flex"
    } else {
        "none"
    }
}

#[component]
pub fn CartBadge() -> impl IntoView {
    let store = use_app_store();

    view! {
        <span
            class="cart-count"
            style:display=move || badge_display(store_cart_count(&store))
        >
            {move || store_cart_count(&store).to_string()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::badge_display;

    #[test]
    fn test_hidden_when_empty() {
        assert_eq!(badge_display(0), "none");
    }

    #[test]
    fn test_shown_when_nonzero() {
        assert_eq!(badge_display(1), "flex");
        assert_eq!(badge_display(12), "flex");
    }
}
