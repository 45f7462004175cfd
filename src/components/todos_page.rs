//! Todos Page Component
//!
//! The authenticated list view: add/edit form, the paginated list with
//! infinite scroll, and logout.

use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use todo_core::{DeleteOutcome, SaveOutcome, TodoEditor, TodoId, TodoItem, TodoScreen};

use crate::browser;
use crate::components::{Loader, ScrollSentinel, TodoForm, TodoRow};
use crate::context::use_app_context;

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctx = use_app_context();
    let services = ctx.services();

    let screen = Rc::new(services.todo_screen());
    let (snapshot, set_snapshot) = signal(screen.list().snapshot());
    screen.list().set_observer(move |s| {
        let _ = set_snapshot.try_set(s.clone());
    });
    let screen: StoredValue<Rc<TodoScreen>, LocalStorage> = StoredValue::new_local(screen);
    let notifier = StoredValue::new_local(services.notifier.clone());

    let editor = RwSignal::new(TodoEditor::default());
    let (saving, set_saving) = signal(false);
    let scroller = NodeRef::<Div>::new();

    // Mount: adopt a redirect token or the stored one, then load page 1
    let query = browser::current_query();
    spawn_local({
        let screen = screen.get_value();
        async move {
            let outcome = screen.mount(&query).await;
            log::debug!("[Todos] mounted: {:?}", outcome);
        }
    });

    on_cleanup(move || {
        screen.try_with_value(|s| s.list().detach());
    });

    let load_more = move |()| {
        let screen = screen.get_value();
        spawn_local(async move {
            screen.load_more().await;
        });
    };

    let save = move |()| {
        let (target, patch) = match editor.with_untracked(|e| e.patch().map(|p| (e.editing.clone(), p))) {
            Ok(v) => v,
            Err(e) => {
                notifier.with_value(|n| n.error(&e.to_string()));
                return;
            }
        };
        let screen = screen.get_value();
        set_saving.set(true);
        spawn_local(async move {
            match screen.save(target, patch).await {
                SaveOutcome::Created(_) | SaveOutcome::Updated(_) => {
                    let _ = editor.try_update(|e| e.clear());
                }
                outcome => log::debug!("[Todos] save not applied: {:?}", outcome),
            }
            let _ = set_saving.try_set(false);
        });
    };

    let edit = move |item: TodoItem| {
        editor.update(|e| e.begin_edit(&item));
    };

    let delete = move |id: TodoId| {
        let screen = screen.get_value();
        spawn_local(async move {
            if screen.delete(&id).await == DeleteOutcome::Deleted {
                let _ = editor.try_update(|e| e.forget(&id));
            }
        });
    };

    let logout = move |_| {
        let screen = screen.get_value();
        spawn_local(async move {
            screen.logout().await;
        });
    };

    let is_loading = move || snapshot.with(|s| s.pagination.is_loading);
    let cursor = Memo::new(move |_| snapshot.with(|s| s.pagination.cursor()));

    view! {
        <div class="todos-page">
            <header class="todos-header">
                <h2>"My Todos"</h2>
                <button type="button" class="logout-btn" on:click=logout>"Logout"</button>
            </header>

            <TodoForm editor=editor busy=saving on_submit=save />

            <div class="todo-scroll" node_ref=scroller>
                <Show
                    when=move || !snapshot.with(|s| s.items.is_empty())
                    fallback=move || view! {
                        <Show when=move || !is_loading()>
                            <p class="empty-state">"No todos found"</p>
                        </Show>
                    }
                >
                    <ul class="todo-list">
                        <For
                            each=move || snapshot.get().items
                            key=|item| (item.id.clone(), item.title.clone(), item.description.clone())
                            children=move |item| {
                                let id = item.id.clone();
                                let editing = Signal::derive(move || {
                                    editor.with(|e| e.editing.as_ref() == Some(&id))
                                });
                                view! {
                                    <TodoRow item=item editing=editing on_edit=edit on_delete=delete />
                                }
                            }
                        />
                    </ul>
                </Show>

                <ScrollSentinel root=scroller cursor=cursor on_visible=load_more />

                <Show when=is_loading>
                    <Loader />
                </Show>
                <Show when=move || snapshot.with(|s| s.pagination.is_exhausted() && !s.items.is_empty())>
                    <p class="end-of-list">"You're all caught up"</p>
                </Show>
            </div>
        </div>
    }
}
