//! Wishlist Button Component
//!
//! Heart toggle whose state follows the server's `added` verdict, never a
//! local flip. Double-clicks race harmlessly; the last envelope to arrive
//! settles the state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::use_app_store;
use crate::toast::use_toasts;

/// Heart icon for the current state.
pub fn heart_icon(active: bool) -> &'static str {
    if active {
        "ri-heart-fill"
    } else {
        "ri-heart-line"
    }
}

#[component]
pub fn WishlistButton(
    #[prop(into)] product_id: String,
    #[prop(optional)] initial_active: bool,
) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (active, set_active) = signal(initial_active);

    let toggle = move |_| {
        let product_id = product_id.clone();
        spawn_local(async move {
            if let Ok(envelope) = api::toggle_wishlist(store, toasts, &product_id).await {
                if envelope.success {
                    set_active.set(envelope.added.unwrap_or(false));
                }
            }
        });
    };

    view! {
        <button
            class=move || if active.get() { "wishlist-btn active" } else { "wishlist-btn" }
            on:click=toggle
        >
            <i class=move || heart_icon(active.get())></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::heart_icon;

    #[test]
    fn test_active_renders_filled() {
        assert_eq!(heart_icon(true), "ri-heart-fill");
    }

    #[test]
    fn test_inactive_renders_outline() {
        assert_eq!(heart_icon(false), "ri-heart-line");
    }
}
