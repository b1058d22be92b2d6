//! Toast Host Component
//!
//! Renders the live toast queue.

use leptos::prelude::*;

use crate::toast::use_toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            {move || toasts.items().into_iter().map(|toast| view! {
                <div class=format!("toast {} show", toast.kind.class())>
                    <i class=toast.kind.icon_class()></i>
                    <span>{toast.message.clone()}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
