//! Todo Web App
//!
//! Root component: provides the stores and services, renders the page for
//! the current route and the toast overlay.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use todo_core::{ClientConfig, Route};

use crate::browser;
use crate::components::{AuthPage, ToastHost, TodosPage};
use crate::context::{AppContext, Services};
use crate::store::UiState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);

    let (route, set_route) = signal(browser::current_route());
    provide_context(AppContext::new(Services::browser(config, store, set_route)));

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| {
        set_route.set(browser::current_route());
    });

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::Auth => view! { <AuthPage /> }.into_any(),
                Route::Todos => view! { <TodosPage /> }.into_any(),
            }}
            <ToastHost />
        </div>
    }
}
