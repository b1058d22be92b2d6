//! Scroll Reveal
//!
//! IntersectionObserver that animates `[data-aos]` elements into view. Each
//! element animates once and is then unobserved.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str = "[data-aos]";
const REVEAL_CLASS: &str = "aos-animate";

/// Observe every reveal target currently in the document.
pub fn observe_reveal_targets() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let targets = document.query_selector_all(REVEAL_SELECTOR)?;
    if targets.length() == 0 {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for index in 0..targets.length() {
        if let Some(node) = targets.item(index) {
            observer.observe(node.unchecked_ref::<Element>());
        }
    }

    // Observer and callback live for the page.
    callback.forget();
    Ok(())
}
