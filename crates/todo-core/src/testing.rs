//! Test Fakes
//!
//! Deterministic stand-ins for the API, storage and UI collaborators.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::Poll;

use async_trait::async_trait;

use crate::api::{AuthApi, TodoApi};
use crate::error::{ApiError, ApiResult};
use crate::model::{Credentials, LoginResponse, RegisterResponse, TodoId, TodoItem, TodoPage, TodoPatch};
use crate::ports::{Confirm, Navigator, Notifier, Prompt, Route};
use crate::session::{Credential, SessionStore};
use crate::storage::MemoryStore;
use crate::sync::TodoList;

pub fn todo(id: u64) -> TodoItem {
    TodoItem::new(id, format!("todo {id}"), None)
}

pub fn page(ids: &[u64], has_more: bool) -> TodoPage {
    TodoPage {
        todos: ids.iter().copied().map(todo).collect(),
        has_more,
    }
}

pub fn ids(items: &[TodoItem]) -> Vec<String> {
    items.iter().map(|t| t.id.to_string()).collect()
}

pub fn cred(token: &str) -> Credential {
    Credential::new(token).unwrap()
}

pub fn server_error() -> ApiError {
    ApiError::Status { status: 500, message: None }
}

/// Polls `future` exactly once from inside the test task.
pub async fn poll_once<F: Future + Unpin>(future: &mut F) -> Poll<F::Output> {
    std::future::poll_fn(|cx| Poll::Ready(Pin::new(&mut *future).poll(cx))).await
}

// ========================
// API
// ========================

/// Recorded `GET /todos/` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub token: String,
    pub page: u32,
    pub limit: u32,
}

#[derive(Default)]
pub struct FakeApi {
    pub pages: RefCell<VecDeque<ApiResult<TodoPage>>>,
    pub list_calls: RefCell<Vec<ListCall>>,
    pub created: RefCell<Vec<TodoPatch>>,
    pub updated: RefCell<Vec<(TodoId, TodoPatch)>>,
    pub deleted: RefCell<Vec<TodoId>>,
    pub next_id: Cell<u64>,
    /// Error returned by the next mutation (create/update/delete)
    pub fail_mutation: RefCell<Option<ApiError>>,
    pub login_result: RefCell<Option<ApiResult<LoginResponse>>>,
    pub register_result: RefCell<Option<ApiResult<RegisterResponse>>>,
    pub auth_calls: RefCell<Vec<Credentials>>,
}

impl FakeApi {
    pub fn with_pages(pages: Vec<ApiResult<TodoPage>>) -> Rc<Self> {
        let api = Self {
            next_id: Cell::new(100),
            ..Self::default()
        };
        *api.pages.borrow_mut() = pages.into();
        Rc::new(api)
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.borrow().len()
    }

    fn mutation(&self) -> ApiResult<()> {
        match self.fail_mutation.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list(&self, token: &Credential, page: u32, limit: u32) -> ApiResult<TodoPage> {
        self.list_calls.borrow_mut().push(ListCall {
            token: token.as_str().to_string(),
            page,
            limit,
        });
        // Suspend once so callers can interleave with an in-flight request.
        tokio::task::yield_now().await;
        self.pages
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(TodoPage { todos: Vec::new(), has_more: false }))
    }

    async fn create(&self, _token: &Credential, patch: &TodoPatch) -> ApiResult<TodoItem> {
        self.mutation()?;
        self.created.borrow_mut().push(patch.clone());
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(TodoItem {
            id: TodoId::from(id),
            title: patch.title.clone(),
            description: patch.description.clone(),
        })
    }

    async fn update(&self, _token: &Credential, id: &TodoId, patch: &TodoPatch) -> ApiResult<TodoItem> {
        self.mutation()?;
        self.updated.borrow_mut().push((id.clone(), patch.clone()));
        Ok(TodoItem {
            id: id.clone(),
            title: patch.title.clone(),
            description: patch.description.clone(),
        })
    }

    async fn delete(&self, _token: &Credential, id: &TodoId) -> ApiResult<()> {
        self.mutation()?;
        self.deleted.borrow_mut().push(id.clone());
        Ok(())
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn register(&self, credentials: &Credentials) -> ApiResult<RegisterResponse> {
        self.auth_calls.borrow_mut().push(credentials.clone());
        self.register_result
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Ok(RegisterResponse::default()))
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.auth_calls.borrow_mut().push(credentials.clone());
        self.login_result.borrow_mut().take().unwrap_or_else(|| {
            Ok(LoginResponse { token: "fresh-token".to_string() })
        })
    }

    fn federated_login_url(&self) -> String {
        "http://api.test/login/google".to_string()
    }
}

// ========================
// UI collaborators
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    Success,
    Error,
    Info,
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: RefCell<Vec<(Toast, String)>>,
}

impl RecordingNotifier {
    pub fn texts(&self, kind: Toast) -> Vec<String> {
        self.toasts
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, text: &str) {
        self.toasts.borrow_mut().push((Toast::Success, text.to_string()));
    }

    fn error(&self, text: &str) {
        self.toasts.borrow_mut().push((Toast::Error, text.to_string()));
    }

    fn info(&self, text: &str) {
        self.toasts.borrow_mut().push((Toast::Info, text.to_string()));
    }
}

/// Answers every prompt with a fixed choice.
pub struct ScriptedConfirm {
    pub answer: Cell<bool>,
    pub asked: RefCell<Vec<&'static str>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Rc<Self> {
        Rc::new(Self {
            answer: Cell::new(answer),
            asked: RefCell::new(Vec::new()),
        })
    }
}

#[async_trait(?Send)]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        self.asked.borrow_mut().push(prompt.title);
        self.answer.get()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<Route>>,
    pub replaced: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: Route) {
        self.visited.borrow_mut().push(route);
    }

    fn replace_current_url(&self, path: &str) {
        self.replaced.borrow_mut().push(path.to_string());
    }
}

// ========================
// Harness
// ========================

/// Everything a screen needs, wired to fakes.
pub struct Harness {
    pub api: Rc<FakeApi>,
    pub storage: Rc<MemoryStore>,
    pub session: Rc<SessionStore>,
    pub notifier: Rc<RecordingNotifier>,
    pub confirm: Rc<ScriptedConfirm>,
    pub navigator: Rc<RecordingNavigator>,
}

impl Harness {
    pub fn new(pages: Vec<ApiResult<TodoPage>>) -> Self {
        let storage = Rc::new(MemoryStore::new());
        Self {
            api: FakeApi::with_pages(pages),
            session: Rc::new(SessionStore::new(storage.clone())),
            storage,
            notifier: Rc::new(RecordingNotifier::default()),
            confirm: ScriptedConfirm::new(true),
            navigator: Rc::new(RecordingNavigator::default()),
        }
    }

    pub fn list(&self, page_size: u32) -> Rc<TodoList> {
        Rc::new(TodoList::new(self.api.clone(), self.notifier.clone(), page_size))
    }
}
