//! Todo Screen Controller
//!
//! User-facing flows of the list view: mounting (including the federated
//! login callback), infinite scroll, add/edit, confirmed delete and logout.
//! Every failure ends as a toast; nothing propagates past this layer.

use std::rc::Rc;

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::model::{TodoId, TodoItem, TodoPatch};
use crate::ports::{Confirm, Navigator, Notifier, Route, DELETE_PROMPT, LOGOUT_PROMPT};
use crate::session::{Credential, SessionStore};
use crate::sync::{LoadOutcome, TodoList};

pub const ADDED: &str = "✅ Todo added!";
pub const UPDATED: &str = "✅ Todo updated!";
pub const SAVE_FAILED: &str = "Something went wrong";
pub const DELETED: &str = "🗑️ Todo deleted";
pub const DELETE_FAILED: &str = "Failed to delete todo";
pub const LOGGED_OUT: &str = "🚪 Logged out successfully";
pub const SESSION_EXPIRED: &str = "Your session has expired, please log in again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    /// No credential anywhere; sent to the login entry point.
    Unauthenticated,
    Loaded(LoadOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(TodoItem),
    Updated(TodoId),
    Failed(ApiError),
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    Failed(ApiError),
    Unauthenticated,
}

pub struct TodoScreen {
    session: Rc<SessionStore>,
    list: Rc<TodoList>,
    api: Rc<dyn TodoApi>,
    notifier: Rc<dyn Notifier>,
    confirm: Rc<dyn Confirm>,
    navigator: Rc<dyn Navigator>,
}

impl TodoScreen {
    pub fn new(
        session: Rc<SessionStore>,
        list: Rc<TodoList>,
        api: Rc<dyn TodoApi>,
        notifier: Rc<dyn Notifier>,
        confirm: Rc<dyn Confirm>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            list,
            api,
            notifier,
            confirm,
            navigator,
        }
    }

    pub fn list(&self) -> &Rc<TodoList> {
        &self.list
    }

    /// Entry point of `/todos`. `query` is the current location's search string.
    pub async fn mount(&self, query: &str) -> MountOutcome {
        let credential = match self.session.adopt_redirect_token(query) {
            Some(redirect) => {
                self.navigator
                    .replace_current_url(&Route::Todos.with_query(&redirect.remaining_query));
                redirect.credential
            }
            None => match self.session.get_credential() {
                Some(credential) => credential,
                None => {
                    log::info!("[TodoScreen] no credential, redirecting to login");
                    self.navigator.navigate_to(Route::Auth);
                    return MountOutcome::Unauthenticated;
                }
            },
        };

        let outcome = self.list.reset(credential).await;
        self.expire_on_unauthorized(&outcome);
        MountOutcome::Loaded(outcome)
    }

    /// Fetch-more trigger (sentinel scrolled into view).
    pub async fn load_more(&self) -> LoadOutcome {
        let outcome = self.list.load_next_page().await;
        self.expire_on_unauthorized(&outcome);
        outcome
    }

    /// Creates a todo (`target == None`) or updates `target`.
    pub async fn save(&self, target: Option<TodoId>, patch: TodoPatch) -> SaveOutcome {
        let Some(token) = self.require_credential() else {
            return SaveOutcome::Unauthenticated;
        };

        let result = match target {
            None => self.api.create(&token, &patch).await.map(|item| {
                self.list.insert_local(item.clone());
                self.notifier.success(ADDED);
                SaveOutcome::Created(item)
            }),
            Some(id) => self.api.update(&token, &id, &patch).await.map(|_| {
                self.list.update_local(&id, &patch);
                self.notifier.success(UPDATED);
                SaveOutcome::Updated(id)
            }),
        };

        result.unwrap_or_else(|err| {
            log::error!("[TodoScreen] save failed: {}", err);
            self.fail(&err, SAVE_FAILED);
            SaveOutcome::Failed(err)
        })
    }

    /// Asks for confirmation before sending anything.
    pub async fn delete(&self, id: &TodoId) -> DeleteOutcome {
        if !self.confirm.confirm(&DELETE_PROMPT).await {
            return DeleteOutcome::Declined;
        }
        let Some(token) = self.require_credential() else {
            return DeleteOutcome::Unauthenticated;
        };

        match self.api.delete(&token, id).await {
            Ok(()) => {
                self.list.remove_local(id);
                self.notifier.success(DELETED);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                log::error!("[TodoScreen] delete {} failed: {}", id, err);
                self.fail(&err, DELETE_FAILED);
                DeleteOutcome::Failed(err)
            }
        }
    }

    /// Returns `true` if the user confirmed and the session was ended.
    pub async fn logout(&self) -> bool {
        if !self.confirm.confirm(&LOGOUT_PROMPT).await {
            return false;
        }
        self.session.clear_credential();
        self.list.detach();
        self.notifier.info(LOGGED_OUT);
        self.navigator.navigate_to(Route::Auth);
        true
    }

    fn require_credential(&self) -> Option<Credential> {
        let credential = self.session.get_credential();
        if credential.is_none() {
            self.notifier.error(SESSION_EXPIRED);
            self.navigator.navigate_to(Route::Auth);
        }
        credential
    }

    fn fail(&self, err: &ApiError, message: &str) {
        if err.is_unauthorized() {
            self.expire();
        } else {
            self.notifier.error(message);
        }
    }

    fn expire_on_unauthorized(&self, outcome: &LoadOutcome) {
        // The list already showed its own fetch error toast.
        if matches!(outcome, LoadOutcome::Failed(err) if err.is_unauthorized()) {
            self.session.clear_credential();
            self.list.detach();
            self.navigator.navigate_to(Route::Auth);
        }
    }

    fn expire(&self) {
        log::warn!("[TodoScreen] credential rejected, ending session");
        self.session.clear_credential();
        self.list.detach();
        self.notifier.error(SESSION_EXPIRED);
        self.navigator.navigate_to(Route::Auth);
    }
}
