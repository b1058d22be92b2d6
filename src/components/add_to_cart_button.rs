//! Add To Cart Button Component
//!
//! Issues a cart-add mutation; the badge follows the response envelope and
//! the toast reports the outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::CartAddRequest;
use crate::store::use_app_store;
use crate::toast::use_toasts;

#[component]
pub fn AddToCartButton(
    #[prop(into)] product_id: String,
    #[prop(optional)] size: Option<String>,
    #[prop(optional)] color: Option<String>,
    #[prop(optional)] quantity: Option<u32>,
) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let add = move |_| {
        let product_id = product_id.clone();
        let size = size.clone();
        let color = color.clone();
        spawn_local(async move {
            let request = CartAddRequest {
                product_id: &product_id,
                size: size.as_deref(),
                color: color.as_deref(),
                quantity,
            };
            let _ = api::add_to_cart(store, toasts, &request).await;
        });
    };

    view! {
        <button class="add-to-cart-btn" on:click=add>
            <i class="ri-shopping-bag-line"></i>
            " Add to Cart"
        </button>
    }
}
