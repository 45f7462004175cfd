//! Todo Form Component
//!
//! Add/edit form bound to the shared [`TodoEditor`] signal.

use leptos::prelude::*;

use todo_core::TodoEditor;

#[component]
pub fn TodoForm(
    editor: RwSignal<TodoEditor>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || editor.with(|e| e.title.clone())
                on:input=move |ev| editor.update(|e| e.title = event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                rows="3"
                prop:value=move || editor.with(|e| e.description.clone())
                on:input=move |ev| editor.update(|e| e.description = event_target_value(&ev))
            ></textarea>
            <div class="todo-form-actions">
                <button type="submit" class="primary-btn" disabled=move || busy.get()>
                    {move || editor.with(|e| e.submit_label())}
                </button>
                <Show when=move || editor.with(|e| e.is_editing())>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| editor.update(|e| e.clear())
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
