//! Auth Page Component
//!
//! Register/login form with a federated (Google) sign-in button.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use todo_core::{AuthMode, AuthScreen};

use crate::browser;
use crate::components::Loader;
use crate::context::use_app_context;

const GOOGLE_ICON: &str = "https://www.svgrepo.com/show/475656/google-color.svg";

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let screen = StoredValue::new_local(Rc::new(ctx.services().auth_screen()));

    let (mode, set_mode) = signal(AuthMode::default());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let screen = screen.get_value();
        let current = mode.get_untracked();
        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());

        set_busy.set(true);
        spawn_local(async move {
            match current {
                AuthMode::Register => {
                    if screen.register(&email_value, &password_value).await {
                        set_mode.set(AuthMode::Login);
                        set_email.set(String::new());
                        set_password.set(String::new());
                    }
                }
                AuthMode::Login => {
                    // Navigation to the list happens inside the screen.
                    screen.login(&email_value, &password_value).await;
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    let on_google = move |_| {
        let url = screen.with_value(|s: &Rc<AuthScreen>| s.federated_login_url());
        browser::redirect_to(&url);
    };

    view! {
        <div class="auth-page">
            <Show when=move || busy.get()>
                <Loader />
            </Show>
            <div class="auth-card">
                <h2>{move || mode.get().heading()}</h2>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="primary-btn" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>

                <div class="divider"><span>"OR"</span></div>

                <button type="button" class="google-btn" on:click=on_google>
                    <img src=GOOGLE_ICON alt="Google" />
                    "Sign in with Google"
                </button>

                <p class="auth-switch">
                    {move || match mode.get() {
                        AuthMode::Register => "Already have an account? ",
                        AuthMode::Login => "Don't have an account? ",
                    }}
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| set_mode.update(|m| *m = m.toggled())
                    >
                        {move || mode.get().toggled().submit_label()}
                    </button>
                </p>
            </div>
        </div>
    }
}
