//! Cart Panel Component
//!
//! Cart page line items with quantity steppers. Quantities live server-side;
//! each adjustment is a mutation and the badge follows the envelope.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{CartAction, CartLine};
use crate::store::{store_cart_items, use_app_store};
use crate::toast::use_toasts;

/// Line quantity after a confirmed adjustment. `None` means the line is gone.
///
/// Mirrors the backend: decreasing a single-item line deletes it.
pub fn adjusted_quantity(current: u32, action: CartAction) -> Option<u32> {
    match action {
        CartAction::Increase => Some(current + 1),
        CartAction::Decrease if current > 1 => Some(current - 1),
        CartAction::Decrease => None,
        CartAction::Remove => None,
    }
}

#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="cart-panel">
            <h2>"Your Cart"</h2>
            {store_cart_items(&store).into_iter().map(|line| view! {
                <CartLineRow line=line />
            }).collect_view()}
        </section>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (quantity, set_quantity) = signal(Some(line.quantity));
    let item_id = line.item_id;
    let price = line.price;

    let adjust = move |action: CartAction| {
        let Some(current) = quantity.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(envelope) = api::update_cart(store, toasts, item_id, action).await {
                if envelope.success {
                    set_quantity.set(adjusted_quantity(current, action));
                }
            }
        });
    };

    view! {
        <Show when=move || quantity.get().is_some()>
            <div class="cart-line">
                <div class="cart-line-info">
                    <span class="cart-line-name">{line.product_name.clone()}</span>
                    <span class="cart-line-variant">
                        {format!("{} / {}", line.size, line.color)}
                    </span>
                </div>
                <div class="quantity-stepper">
                    <button class="qty-btn" on:click=move |_| adjust(CartAction::Decrease)>"-"</button>
                    <span class="quantity">{move || quantity.get().unwrap_or(0)}</span>
                    <button class="qty-btn" on:click=move |_| adjust(CartAction::Increase)>"+"</button>
                </div>
                <span class="cart-line-price">
                    {move || format!("${:.2}", price * f64::from(quantity.get().unwrap_or(0)))}
                </span>
                <button class="cart-line-remove" on:click=move |_| adjust(CartAction::Remove)>
                    <i class="ri-delete-bin-line"></i>
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::adjusted_quantity;
    use crate::models::CartAction;

    #[test]
    fn test_increase() {
        assert_eq!(adjusted_quantity(2, CartAction::Increase), Some(3));
    }

    #[test]
    fn test_decrease_removes_last_item() {
        assert_eq!(adjusted_quantity(2, CartAction::Decrease), Some(1));
        assert_eq!(adjusted_quantity(1, CartAction::Decrease), None);
    }

    #[test]
    fn test_remove() {
        assert_eq!(adjusted_quantity(5, CartAction::Remove), None);
    }
}
