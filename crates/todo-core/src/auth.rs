//! Auth Screen Controller
//!
//! Register and login against the API, plus the federated login URL.

use std::rc::Rc;

use crate::api::AuthApi;
use crate::model::Credentials;
use crate::ports::{Navigator, Notifier, Route};
use crate::session::{Credential, SessionStore};

pub const REGISTERED: &str = "Registered successfully!";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGGED_IN: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";

/// Which form the auth screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Register,
    Login,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Register => AuthMode::Login,
            AuthMode::Login => AuthMode::Register,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Register => "Create an Account",
            AuthMode::Login => "Login",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Register => "Register",
            AuthMode::Login => "Login",
        }
    }
}

pub struct AuthScreen {
    api: Rc<dyn AuthApi>,
    session: Rc<SessionStore>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl AuthScreen {
    pub fn new(
        api: Rc<dyn AuthApi>,
        session: Rc<SessionStore>,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            session,
            notifier,
            navigator,
        }
    }

    /// Returns `true` on success; the caller then switches to [`AuthMode::Login`].
    pub async fn register(&self, email: &str, password: &str) -> bool {
        let credentials = match Credentials::new(email, password) {
            Ok(c) => c,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return false;
            }
        };

        match self.api.register(&credentials).await {
            Ok(response) => {
                log::info!("[Auth] registered {}", credentials.email);
                self.notifier
                    .success(response.message.as_deref().unwrap_or(REGISTERED));
                true
            }
            Err(err) => {
                log::warn!("[Auth] register failed: {}", err);
                self.notifier.error(err.server_message().unwrap_or(REGISTER_FAILED));
                false
            }
        }
    }

    /// Stores the token and opens the list on success. Nothing is stored on failure.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let credentials = match Credentials::new(email, password) {
            Ok(c) => c,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return false;
            }
        };

        let credential = match self.api.login(&credentials).await {
            Ok(response) => Credential::new(response.token),
            Err(err) => {
                log::warn!("[Auth] login failed: {}", err);
                self.notifier.error(err.server_message().unwrap_or(LOGIN_FAILED));
                return false;
            }
        };
        let Some(credential) = credential else {
            log::warn!("[Auth] login response carried an empty token");
            self.notifier.error(LOGIN_FAILED);
            return false;
        };

        self.session.set_credential(&credential);
        self.notifier.success(LOGGED_IN);
        self.navigator.navigate_to(Route::Todos);
        true
    }

    pub fn federated_login_url(&self) -> String {
        self.api.federated_login_url()
    }
}
