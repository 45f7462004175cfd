//! Todo Client Core
//!
//! Platform-free logic behind the todo web client: data model, session
//! store, API traits, the paginated list synchronizer and the screen
//! controllers that tie them to notifications, dialogs and navigation.

pub mod api;
pub mod auth;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod ports;
pub mod screen;
pub mod session;
pub mod storage;
pub mod sync;

#[cfg(test)]
mod testing;

pub use api::{AuthApi, Endpoints, TodoApi};
pub use auth::{AuthMode, AuthScreen};
pub use config::ClientConfig;
pub use editor::TodoEditor;
pub use error::{ApiError, ApiResult, ConfigError, ValidationError};
pub use model::{Credentials, LoginResponse, RegisterResponse, TodoId, TodoItem, TodoPage, TodoPatch};
pub use ports::{Confirm, Navigator, Notifier, Prompt, Route};
pub use screen::{DeleteOutcome, MountOutcome, SaveOutcome, TodoScreen};
pub use session::{Credential, RedirectLogin, SessionStore};
pub use storage::{KeyValueStore, MemoryStore};
pub use sync::{ListSnapshot, LoadOutcome, Pagination, TodoList};
