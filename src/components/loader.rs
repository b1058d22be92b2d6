//! Page Loader Component
//!
//! Splash overlay; fades shortly after window load, with a hard fallback so
//! it never sticks.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const LOAD_GRACE_MS: u32 = 600;
const LOAD_FALLBACK_MS: u32 = 2_500;

#[component]
pub fn Loader() -> impl IntoView {
    let (hidden, set_hidden) = signal(false);

    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            let callback = Closure::<dyn FnMut()>::new(move || {
                spawn_local(async move {
                    TimeoutFuture::new(LOAD_GRACE_MS).await;
                    set_hidden.set(true);
                });
            });
            let _ =
                window.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
            callback.forget();
        }
        // The load event may have fired before mount.
        spawn_local(async move {
            TimeoutFuture::new(LOAD_FALLBACK_MS).await;
            set_hidden.set(true);
        });
    });

    view! {
        <div class=move || if hidden.get() { "loader hidden" } else { "loader" }>
            <span class="loader-mark">"AKVRIX"</span>
        </div>
    }
}
