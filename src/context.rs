//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use todo_core::{
    AuthApi, AuthScreen, ClientConfig, Confirm, Navigator, Notifier, Route, SessionStore,
    TodoApi, TodoList, TodoScreen,
};

use crate::browser::{BrowserDialog, BrowserNavigator, BrowserStorage};
use crate::http::HttpBackend;
use crate::store::{ToastNotifier, UiStore};

/// Reads the build-time overrides; bad values are logged and replaced by defaults.
pub fn load_config() -> ClientConfig {
    ClientConfig::from_overrides(
        option_env!("TODO_API_BASE_URL"),
        option_env!("TODO_PAGE_SIZE"),
        option_env!("TODO_LOG_LEVEL"),
    )
    .unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[APP] invalid configuration ({}), using defaults", e).into());
        ClientConfig::default()
    })
}

/// Browser implementations of every collaborator the screens need
pub struct Services {
    pub config: ClientConfig,
    pub session: Rc<SessionStore>,
    pub auth_api: Rc<dyn AuthApi>,
    pub todo_api: Rc<dyn TodoApi>,
    pub notifier: Rc<dyn Notifier>,
    pub confirm: Rc<dyn Confirm>,
    pub navigator: Rc<dyn Navigator>,
}

impl Services {
    pub fn browser(config: ClientConfig, store: UiStore, set_route: WriteSignal<Route>) -> Self {
        let backend = Rc::new(HttpBackend::new(&config.api_base_url));
        Self {
            session: Rc::new(SessionStore::new(Rc::new(BrowserStorage))),
            auth_api: backend.clone(),
            todo_api: backend,
            notifier: Rc::new(ToastNotifier::new(store)),
            confirm: Rc::new(BrowserDialog),
            navigator: Rc::new(BrowserNavigator::new(set_route)),
            config,
        }
    }

    pub fn auth_screen(&self) -> AuthScreen {
        AuthScreen::new(
            self.auth_api.clone(),
            self.session.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        )
    }

    /// A fresh list and screen; one per mount of the todo page.
    pub fn todo_screen(&self) -> TodoScreen {
        let list = Rc::new(TodoList::new(
            self.todo_api.clone(),
            self.notifier.clone(),
            self.config.page_size,
        ));
        TodoScreen::new(
            self.session.clone(),
            list,
            self.todo_api.clone(),
            self.notifier.clone(),
            self.confirm.clone(),
            self.navigator.clone(),
        )
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Rc<Services>, LocalStorage>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        Self {
            services: StoredValue::new_local(Rc::new(services)),
        }
    }

    pub fn services(&self) -> Rc<Services> {
        self.services.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
