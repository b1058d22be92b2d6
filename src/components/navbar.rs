//! Navbar Component
//!
//! Sticky navigation with scroll behavior, hamburger menu and overlay.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{CartBadge, ThemeToggle};
use crate::context::use_app_context;

/// Links rendered in the nav menu
const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/shop/", "Shop"),
    ("/cart/", "Cart"),
    ("/account/", "Account"),
];

/// Scroll state: `scrolled` past 50px, hidden while moving down past 200px.
pub fn scroll_state(y: f64, last_y: f64) -> (bool, bool) {
    (y > 50.0, y > last_y && y > 200.0)
}

/// Navbar class for the current scroll state.
pub fn navbar_class(scrolled: bool, hidden: bool) -> String {
    let mut class = String::from("navbar");
    if scrolled {
        class.push_str(" scrolled");
    }
    if hidden {
        class.push_str(" nav-hidden");
    }
    class
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let (scrolled, set_scrolled) = signal(false);
    let (hidden, set_hidden) = signal(false);

    // Scroll listener lives for the page.
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut last_y = 0.0;
        let callback = Closure::<dyn FnMut()>::new(move || {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let (is_scrolled, is_hidden) = scroll_state(y, last_y);
            set_scrolled.set(is_scrolled);
            set_hidden.set(is_hidden);
            last_y = y;
        });
        let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        callback.forget();
    });

    // Open menu locks body scroll
    Effect::new(move |_| {
        let open = ctx.nav_open.get();
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let class_list = body.class_list();
            let _ = if open {
                class_list.add_1("no-scroll")
            } else {
                class_list.remove_1("no-scroll")
            };
        }
    });

    view! {
        <nav class=move || navbar_class(scrolled.get(), hidden.get())>
            <a class="nav-brand" href="/">"AKVRIX"</a>

            <div class=move || if ctx.nav_open.get() { "nav-menu open" } else { "nav-menu" }>
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <a class="nav-link" href=*href on:click=move |_| ctx.close_nav()>{*label}</a>
                }).collect_view()}
            </div>

            <div class="nav-actions">
                <button class="nav-icon-btn search-toggle" on:click=move |_| ctx.open_search()>
                    <i class="ri-search-line"></i>
                </button>
                <ThemeToggle />
                <a class="nav-icon-btn cart-link" href="/cart/">
                    <i class="ri-shopping-bag-line"></i>
                    <CartBadge />
                </a>
                <button
                    class=move || if ctx.nav_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    on:click=move |_| ctx.toggle_nav()
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
        <div
            class=move || if ctx.nav_open.get() { "nav-overlay open" } else { "nav-overlay" }
            on:click=move |_| ctx.close_nav()
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::{navbar_class, scroll_state};

    #[test]
    fn test_scrolled_past_threshold() {
        assert_eq!(scroll_state(60.0, 0.0), (true, false));
        assert_eq!(scroll_state(10.0, 0.0), (false, false));
    }

    #[test]
    fn test_hidden_only_when_scrolling_down_past_200() {
        assert_eq!(scroll_state(250.0, 100.0), (true, true));
        // Scrolling up at the same depth keeps the bar visible.
        assert_eq!(scroll_state(250.0, 300.0), (true, false));
        // Shallow scrolls never hide it.
        assert_eq!(scroll_state(150.0, 100.0), (true, false));
    }

    #[test]
    fn test_navbar_class() {
        assert_eq!(navbar_class(false, false), "navbar");
        assert_eq!(navbar_class(true, false), "navbar scrolled");
        assert_eq!(navbar_class(true, true), "navbar scrolled nav-hidden");
    }
}
