//! Browser Adapters
//!
//! `localStorage`, history/location and `window.confirm` behind the core
//! collaborator traits.

use std::fmt::Debug;

use async_trait::async_trait;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use todo_core::{Confirm, KeyValueStore, Navigator, Prompt, Route};

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// Logs a failed browser call; returns whether it succeeded.
fn warn_if_failed<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[Browser] {} failed: {:?}", action, e);
            false
        }
    }
}

// ========================
// Storage
// ========================

/// `window.localStorage`; silently inert when storage is unavailable.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                warn_if_failed(&format!("storing {:?}", key), storage.set_item(key, value));
            }
            None => log::warn!("[Storage] unavailable, could not persist {:?}", key),
        }
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                warn_if_failed(&format!("removing {:?}", key), storage.remove_item(key));
            }
            None => log::warn!("[Storage] unavailable, could not remove {:?}", key),
        }
    }
}

// ========================
// Location / History
// ========================

pub fn current_route() -> Route {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Auth)
}

/// `location.search`, including the leading `?` when present.
pub fn current_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Full page load of an external URL (federated login).
pub fn redirect_to(url: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("[Browser] redirect to {} failed: {:?}", url, e);
        }
    }
}

/// Pushes history entries and drives the route signal the app renders from.
pub struct BrowserNavigator {
    set_route: WriteSignal<Route>,
}

impl BrowserNavigator {
    pub fn new(set_route: WriteSignal<Route>) -> Self {
        Self { set_route }
    }

    fn history() -> Option<web_sys::History> {
        window().and_then(|w| w.history().ok())
    }
}

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, route: Route) {
        if let Some(history) = Self::history() {
            warn_if_failed(
                "pushState",
                history.push_state_with_url(&JsValue::NULL, "", Some(route.path())),
            );
        }
        log::debug!("[Nav] -> {}", route.path());
        self.set_route.set(route);
    }

    fn replace_current_url(&self, path: &str) {
        if let Some(history) = Self::history() {
            warn_if_failed(
                "replaceState",
                history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
            );
        }
    }
}

// ========================
// Dialogs
// ========================

/// Native `window.confirm`
pub struct BrowserDialog;

#[async_trait(?Send)]
impl Confirm for BrowserDialog {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        let message = format!("{}\n\n{}", prompt.title, prompt.text);
        window()
            .and_then(|w| w.confirm_with_message(&message).ok())
            .unwrap_or(false)
    }
}
