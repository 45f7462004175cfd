use leptos::prelude::*;

/// Full-page spinner shown while a request is in flight
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-overlay">
            <div class="spinner"></div>
        </div>
    }
}
