#![allow(warnings)]
//! AKVRIX Storefront Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod cookies;
mod models;
mod reveal;
mod store;
mod theme;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
