//! Theme Toggle Component
//!
//! Dark mode switch; applies the saved theme on mount and persists changes.

use leptos::prelude::*;

use crate::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (current, set_current) = signal(theme::load());

    Effect::new(move |_| theme::apply(current.get()));

    let toggle = move |_| {
        let next = current.get().toggled();
        set_current.set(next);
        theme::persist(next);
    };

    view! {
        <button class="nav-icon-btn theme-toggle" on:click=toggle>
            <i class=move || current.get().icon_class()></i>
        </button>
    }
}
