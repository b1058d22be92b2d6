//! AKVRIX Storefront App
//!
//! Chrome wiring: provides the store, toast queue and UI context, then
//! renders the page from whatever the server embedded.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CartPanel, CheckoutForm, Loader, Navbar, ProductCard, SearchModal, ToastHost,
};
use crate::context::AppContext;
use crate::reveal;
use crate::store::{store_cart_count, store_cart_items, store_products, AppState, AppStore};
use crate::toast::Toasts;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::from_page());
    provide_context(store);
    provide_context(Toasts::new());

    let (nav_open, set_nav_open) = signal(false);
    let (search_open, set_search_open) = signal(false);
    provide_context(AppContext::new(
        (nav_open, set_nav_open),
        (search_open, set_search_open),
    ));

    web_sys::console::log_1(
        &format!("[APP] mounted, cart_count={}", store_cart_count(&store)).into(),
    );

    // Reveal targets exist only after the first render.
    Effect::new(move |_| {
        if let Err(error) = reveal::observe_reveal_targets() {
            web_sys::console::warn_1(&format!("[APP] reveal init failed: {error:?}").into());
        }
    });

    let products = store_products(&store);
    let has_cart = !store_cart_items(&store).is_empty();

    view! {
        <Loader />
        <Navbar />
        <SearchModal />

        <main class="page-content">
            {(!products.is_empty()).then(|| view! {
                <section class="product-grid">
                    {products.clone().into_iter().map(|product| view! {
                        <ProductCard product=product />
                    }).collect_view()}
                </section>
            })}

            {has_cart.then(|| view! {
                <CartPanel />
                <CheckoutForm />
            })}
        </main>

        <ToastHost />
    }
}
