//! Todo Row Component
//!
//! One card in the list with edit and delete actions.

use leptos::prelude::*;

use todo_core::{TodoId, TodoItem};

#[component]
pub fn TodoRow(
    item: TodoItem,
    /// Row currently loaded into the form
    #[prop(into)]
    editing: Signal<bool>,
    #[prop(into)] on_edit: Callback<TodoItem>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    let TodoItem { id, title, description } = item.clone();

    view! {
        <li class=move || if editing.get() { "todo-card editing" } else { "todo-card" }>
            <div class="todo-text">
                <h3 class="todo-title">{title}</h3>
                {description.map(|d| view! { <p class="todo-description">{d}</p> })}
            </div>
            <div class="todo-actions">
                <button
                    type="button"
                    class="edit-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(item.clone());
                    }
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id.clone());
                    }
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}
