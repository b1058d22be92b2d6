//! Transient Notifications
//!
//! Toast queue rendered by `ToastHost`; every entry dismisses itself after
//! three seconds. Every mutation outcome, success or failure, lands here so
//! the visitor always sees something.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            ToastKind::Success => "ri-check-line",
            ToastKind::Error => "ri-information-line",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue handle provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Currently visible toasts (reactive when read inside a tracking context)
    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, message }));

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            items.update(|items| items.retain(|toast| toast.id != id));
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[cfg(test)]
mod tests {
    use super::ToastKind;

    #[test]
    fn test_success_styling() {
        assert_eq!(ToastKind::Success.class(), "toast-success");
        assert_eq!(ToastKind::Success.icon_class(), "ri-check-line");
    }

    #[test]
    fn test_error_styling() {
        assert_eq!(ToastKind::Error.class(), "toast-error");
        assert_eq!(ToastKind::Error.icon_class(), "ri-information-line");
    }
}
