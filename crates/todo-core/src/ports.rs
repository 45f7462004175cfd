//! UI Collaborators
//!
//! Notifications, confirmation dialogs and navigation as injected
//! capabilities, so screens run the same against the browser and test fakes.

use async_trait::async_trait;

/// Toast surface. Fire-and-forget.
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
    fn info(&self, text: &str);
}

/// Text of a yes/no confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub text: &'static str,
}

pub const DELETE_PROMPT: Prompt = Prompt {
    title: "Are you sure?",
    text: "This will permanently delete the todo!",
};

pub const LOGOUT_PROMPT: Prompt = Prompt {
    title: "Logout Confirmation",
    text: "Are you sure you want to log out?",
};

#[async_trait(?Send)]
pub trait Confirm {
    /// Resolves to `true` only if the user accepted.
    async fn confirm(&self, prompt: &Prompt) -> bool;
}

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Register/login entry point
    Auth,
    Todos,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Auth => "/",
            Route::Todos => "/todos",
        }
    }

    /// Unknown paths fall back to the login entry point.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/todos" => Route::Todos,
            _ => Route::Auth,
        }
    }

    /// Path plus an optional query string (without leading `?`).
    pub fn with_query(self, query: &str) -> String {
        if query.is_empty() {
            self.path().to_string()
        } else {
            format!("{}?{}", self.path(), query)
        }
    }
}

pub trait Navigator {
    /// Pushes a new history entry and shows `route`.
    fn navigate_to(&self, route: Route);

    /// Rewrites the current history entry without navigating.
    fn replace_current_url(&self, path: &str);
}
