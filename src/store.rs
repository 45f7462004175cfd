//! Global UI State Store
//!
//! Toast notifications, kept in a `reactive_stores` store so the toast host
//! re-renders only when the toast list changes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use todo_core::Notifier;

/// Auto-dismiss delay
pub const TOAST_TIMEOUT_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Adds a toast and returns its id
pub fn store_push_toast(store: &UiStore, kind: ToastKind, text: &str) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        text: text.to_string(),
    });
    id
}

pub fn store_dismiss_toast(store: &UiStore, id: u32) {
    store.toasts().write().retain(|t| t.id != id);
}

/// [`Notifier`] backed by the toast store
pub struct ToastNotifier {
    store: UiStore,
}

impl ToastNotifier {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }

    fn show(&self, kind: ToastKind, text: &str) {
        let id = store_push_toast(&self.store, kind, text);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            store_dismiss_toast(&store, id);
        });
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, text: &str) {
        self.show(ToastKind::Success, text);
    }

    fn error(&self, text: &str) {
        self.show(ToastKind::Error, text);
    }

    fn info(&self, text: &str) {
        self.show(ToastKind::Info, text);
    }
}
