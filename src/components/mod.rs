//! UI Components
//!
//! Leptos components for the two pages and the shared overlays.

mod auth_page;
mod loader;
mod scroll_sentinel;
mod toast_host;
mod todo_form;
mod todo_row;
mod todos_page;

pub use auth_page::AuthPage;
pub use loader::Loader;
pub use scroll_sentinel::ScrollSentinel;
pub use toast_host::ToastHost;
pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
pub use todos_page::TodosPage;
