//! Todo List Synchronizer
//!
//! Owns the paginated todo collection and its cursor. Pages are requested
//! one at a time: `is_loading` is held for the whole request, so a fetch-more
//! trigger that fires again while a page is in flight is ignored, and page N
//! is merged before page N+1 can be asked for.
//!
//! Everything runs on one thread; state sits in a `RefCell` that is never
//! borrowed across an `.await`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::api::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::model::{TodoId, TodoItem, TodoPage, TodoPatch};
use crate::ports::Notifier;
use crate::session::Credential;

pub const FETCH_FAILED: &str = "Failed to fetch todos";

/// Pagination cursor and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Next page to request, starting at 1
    pub next_page: u32,
    /// Cleared when the server reports no more data
    pub has_more: bool,
    pub is_loading: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            next_page: 1,
            has_more: true,
            is_loading: false,
        }
    }
}

impl Pagination {
    pub fn can_load(&self) -> bool {
        !self.is_loading && self.has_more
    }

    pub fn is_exhausted(&self) -> bool {
        !self.has_more
    }

    /// Page the scroll trigger waits for; `None` once exhausted.
    /// Only a landed page or an exhausting response moves it, so a failed
    /// load leaves it unchanged.
    pub fn cursor(&self) -> Option<u32> {
        self.has_more.then_some(self.next_page)
    }
}

/// What the UI renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSnapshot {
    pub items: Vec<TodoItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Page fetched; `merged` counts the items that were new.
    Loaded { page: u32, merged: usize },
    /// Not issued: already loading, exhausted, detached or no credential.
    Skipped,
    /// Response arrived after a reset or teardown and was dropped.
    Stale,
    Failed(ApiError),
}

struct ListState {
    items: Vec<TodoItem>,
    pagination: Pagination,
    credential: Option<Credential>,
    /// Bumped by every reset; responses carry the epoch they were issued in.
    epoch: u64,
    detached: bool,
}

type Observer = Box<dyn Fn(&ListSnapshot)>;

pub struct TodoList {
    api: Rc<dyn TodoApi>,
    notifier: Rc<dyn Notifier>,
    page_size: u32,
    state: RefCell<ListState>,
    observer: RefCell<Option<Observer>>,
}

/// Clears `is_loading` if the request future is dropped before completion.
struct LoadingGuard<'a> {
    list: &'a TodoList,
    epoch: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.list.state.try_borrow_mut() {
            if state.epoch == self.epoch {
                state.pagination.is_loading = false;
            }
        }
    }
}

impl TodoList {
    pub fn new(api: Rc<dyn TodoApi>, notifier: Rc<dyn Notifier>, page_size: u32) -> Self {
        Self {
            api,
            notifier,
            page_size: page_size.max(1),
            state: RefCell::new(ListState {
                items: Vec::new(),
                pagination: Pagination::default(),
                credential: None,
                epoch: 0,
                detached: false,
            }),
            observer: RefCell::new(None),
        }
    }

    /// Registers the callback that receives a snapshot after every change.
    pub fn set_observer(&self, observer: impl Fn(&ListSnapshot) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn snapshot(&self) -> ListSnapshot {
        let state = self.state.borrow();
        ListSnapshot {
            items: state.items.clone(),
            pagination: state.pagination,
        }
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.state.borrow().items.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.state.borrow().pagination
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_detached(&self) -> bool {
        self.state.borrow().detached
    }

    // ========================
    // Loading
    // ========================

    /// Starts over with `credential` and loads the first page.
    pub async fn reset(&self, credential: Credential) -> LoadOutcome {
        {
            let mut state = self.state.borrow_mut();
            if state.detached {
                return LoadOutcome::Skipped;
            }
            state.items.clear();
            state.pagination = Pagination::default();
            state.credential = Some(credential);
            state.epoch += 1;
        }
        log::debug!("[TodoList] reset");
        self.publish();
        self.load_next_page().await
    }

    /// Fetches the page under the cursor. A no-op unless idle with more data.
    pub async fn load_next_page(&self) -> LoadOutcome {
        let (token, page, epoch) = {
            let mut state = self.state.borrow_mut();
            if state.detached || !state.pagination.can_load() {
                return LoadOutcome::Skipped;
            }
            let Some(token) = state.credential.clone() else {
                log::debug!("[TodoList] no credential, not loading");
                return LoadOutcome::Skipped;
            };
            state.pagination.is_loading = true;
            (token, state.pagination.next_page, state.epoch)
        };
        let guard = LoadingGuard { list: self, epoch };
        self.publish();

        log::debug!("[TodoList] fetching page {} (limit {})", page, self.page_size);
        let result = self.api.list(&token, page, self.page_size).await;

        let outcome = self.apply_page(epoch, page, result);
        drop(guard);

        match &outcome {
            LoadOutcome::Loaded { merged, .. } => {
                log::info!("[TodoList] page {} merged {} new item(s)", page, merged);
                self.publish();
            }
            LoadOutcome::Failed(err) => {
                log::error!("[TodoList] page {} failed: {}", page, err);
                self.notifier.error(FETCH_FAILED);
                self.publish();
            }
            LoadOutcome::Stale => log::debug!("[TodoList] dropped stale response for page {}", page),
            LoadOutcome::Skipped => {}
        }
        outcome
    }

    fn apply_page(&self, epoch: u64, page: u32, result: ApiResult<TodoPage>) -> LoadOutcome {
        let mut state = self.state.borrow_mut();
        if state.detached || state.epoch != epoch {
            return LoadOutcome::Stale;
        }
        state.pagination.is_loading = false;

        match result {
            Ok(body) => {
                // The first page after a reset replaces whatever is shown.
                let merged = merge_page(&mut state.items, body.todos, page == 1);
                state.pagination.has_more = body.has_more;
                state.pagination.next_page += 1;
                LoadOutcome::Loaded { page, merged }
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    // ========================
    // Local mutations
    // ========================

    /// Puts a freshly created item at the front.
    pub fn insert_local(&self, item: TodoItem) {
        {
            let mut state = self.state.borrow_mut();
            state.items.retain(|t| t.id != item.id);
            state.items.insert(0, item);
        }
        self.publish();
    }

    /// Returns `false` if no item has `id`.
    pub fn update_local(&self, id: &TodoId, patch: &TodoPatch) -> bool {
        let found = {
            let mut state = self.state.borrow_mut();
            state
                .items
                .iter_mut()
                .find(|t| &t.id == id)
                .map(|t| t.apply(patch))
                .is_some()
        };
        if found {
            self.publish();
        }
        found
    }

    /// Returns `false` if no item has `id`.
    pub fn remove_local(&self, id: &TodoId) -> bool {
        let removed = {
            let mut state = self.state.borrow_mut();
            let before = state.items.len();
            state.items.retain(|t| &t.id != id);
            state.items.len() != before
        };
        if removed {
            self.publish();
        }
        removed
    }

    /// Teardown: pending and future responses are ignored, nothing is published.
    pub fn detach(&self) {
        let mut state = self.state.borrow_mut();
        state.detached = true;
        state.pagination.is_loading = false;
        drop(state);
        self.observer.borrow_mut().take();
    }

    fn publish(&self) {
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&self.snapshot());
        }
    }
}

/// Merges `incoming` into `items`, skipping ids already present.
/// With `replace`, `items` is cleared first. Returns how many were added.
pub fn merge_page(items: &mut Vec<TodoItem>, incoming: Vec<TodoItem>, replace: bool) -> usize {
    if replace {
        items.clear();
    }
    let mut seen: HashSet<TodoId> = items.iter().map(|t| t.id.clone()).collect();
    let before = items.len();
    items.extend(incoming.into_iter().filter(|t| seen.insert(t.id.clone())));
    items.len() - before
}
