//! Checkout Form Component
//!
//! Collects shipping details and places the order. Fields are read straight
//! off the form at submit time; the server owns all validation beyond the
//! browser's `required` checks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::OrderRequest;
use crate::store::use_app_store;
use crate::toast::use_toasts;

fn order_from_form(data: &web_sys::FormData) -> OrderRequest {
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    OrderRequest {
        first_name: field("first_name"),
        last_name: field("last_name"),
        email: field("email"),
        phone: field("phone"),
        address: field("address"),
        city: field("city"),
        state: field("state"),
        zip_code: field("zip_code"),
        country: field("country"),
        payment_method: field("payment_method"),
    }
}

#[component]
pub fn CheckoutForm() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();
    let (placed_number, set_placed_number) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let form = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok());
        let Some(form) = form else {
            return;
        };
        let Ok(data) = web_sys::FormData::new_with_form(&form) else {
            return;
        };
        let request = order_from_form(&data);
        set_submitting.set(true);
        spawn_local(async move {
            if let Ok(envelope) = api::place_order(store, toasts, &request).await {
                if envelope.success {
                    set_placed_number.set(envelope.order_number.clone());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || placed_number.get().is_none()
            fallback=move || view! {
                <div class="order-confirmation">
                    <i class="ri-checkbox-circle-line"></i>
                    <h3>"Thank you!"</h3>
                    <p>
                        {move || placed_number.get()
                            .map(|number| format!("Your order number is {number}."))
                            .unwrap_or_default()}
                    </p>
                </div>
            }
        >
            <form class="checkout-form" on:submit=submit>
                <div class="form-row">
                    <input type="text" name="first_name" placeholder="First name" required />
                    <input type="text" name="last_name" placeholder="Last name" required />
                </div>
                <div class="form-row">
                    <input type="email" name="email" placeholder="Email" required />
                    <input type="tel" name="phone" placeholder="Phone" />
                </div>
                <input type="text" name="address" placeholder="Address" required />
                <div class="form-row">
                    <input type="text" name="city" placeholder="City" required />
                    <input type="text" name="state" placeholder="State" />
                    <input type="text" name="zip_code" placeholder="ZIP" />
                </div>
                <input type="text" name="country" placeholder="Country" value="India" />
                <select name="payment_method">
                    <option value="card">"Card"</option>
                    <option value="cod">"Cash on delivery"</option>
                </select>
                <button type="submit" class="place-order-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Placing order..." } else { "Place Order" }}
                </button>
            </form>
        </Show>
    }
}
