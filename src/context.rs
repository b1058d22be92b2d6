//! Application Context
//!
//! Shared chrome state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide UI signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mobile nav menu open - read
    pub nav_open: ReadSignal<bool>,
    /// Mobile nav menu open - write
    set_nav_open: WriteSignal<bool>,
    /// Search modal open - read
    pub search_open: ReadSignal<bool>,
    /// Search modal open - write
    set_search_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        nav_open: (ReadSignal<bool>, WriteSignal<bool>),
        search_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            nav_open: nav_open.0,
            set_nav_open: nav_open.1,
            search_open: search_open.0,
            set_search_open: search_open.1,
        }
    }

    /// Toggle the mobile menu and its overlay
    pub fn toggle_nav(&self) {
        self.set_nav_open.update(|open| *open = !*open);
    }

    /// Close the mobile menu
    pub fn close_nav(&self) {
        self.set_nav_open.set(false);
    }

    /// Open the search modal
    pub fn open_search(&self) {
        self.set_search_open.set(true);
    }

    /// Close the search modal
    pub fn close_search(&self) {
        self.set_search_open.set(false);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
