//! Toast Host Component
//!
//! Renders the toast stack from the UI store. Click a toast to dismiss it early.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_ui_store, UiStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.class()
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
