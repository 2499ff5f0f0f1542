//! Login Page Component
//!
//! Email/password form. A successful login starts the session and moves to
//! the task list; local validation failures and backend rejections surface
//! as the same inline message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::Credentials;
use crate::store::{store_start_session, use_app_store};
use crate::validate::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();

        if let Err(error) = validate_login(&email, &password) {
            set_message.set(error);
            return;
        }

        let navigate = navigate.clone();
        spawn_local(async move {
            let credentials = Credentials { email, password };
            match api::login(&credentials).await {
                Ok(token) => {
                    store_start_session(&store, token);
                    navigate("/todos", Default::default());
                }
                Err(error) => set_message.set(error.message_or("Invalid credentials")),
            }
        });
    };

    view! {
        <div class="auth-page login-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-subtitle">"Please sign in to your account"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            set_message.set(String::new());
                        }
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            set_message.set(String::new());
                        }
                    />

                    <Show when=move || !message.get().is_empty()>
                        <p class="form-error">{move || message.get()}</p>
                    </Show>

                    <button type="submit">"Login"</button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? " <a href="/register">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
