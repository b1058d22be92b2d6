//! Search Modal Component
//!
//! Overlay search box; submits to the shop page with the query string.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Target URL for a submitted query.
pub fn search_url(query: &str) -> String {
    format!("/shop/?q={}", utf8_percent_encode(query.trim(), NON_ALPHANUMERIC))
}

#[component]
pub fn SearchModal() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        if q.trim().is_empty() {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&search_url(&q));
        }
    };

    // Backdrop click closes; clicks inside the box stay.
    let backdrop_click = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            ctx.close_search();
        }
    };

    view! {
        <Show when=move || ctx.search_open.get()>
            <div class="search-modal open" on:click=backdrop_click>
                <div class="search-box">
                    <form on:submit=submit>
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search products..."
                            autofocus=true
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_query.set(input.value());
                            }
                        />
                    </form>
                    <button class="search-close" on:click=move |_| ctx.close_search()>
                        <i class="ri-close-line"></i>
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::search_url;

    #[test]
    fn test_query_is_escaped() {
        assert_eq!(search_url("denim jacket"), "/shop/?q=denim%20jacket");
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(search_url("  hoodie "), "/shop/?q=hoodie");
    }
}
