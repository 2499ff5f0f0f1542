//! Register Page Component
//!
//! Registration form. A 201 from the backend returns the user to the login
//! screen; everything else surfaces as an inline message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::Registration;
use crate::validate::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let email = email.get();
        let password = password.get();

        if let Err(error) = validate_registration(&username, &email, &password) {
            set_errors.set(error);
            return;
        }

        let navigate = navigate.clone();
        spawn_local(async move {
            let registration = Registration {
                username,
                email,
                password,
            };
            match api::register(&registration).await {
                Ok(201) => navigate("/", Default::default()),
                Ok(_) => {}
                Err(error) => set_errors.set(error.message_or("Something went wrong")),
            }
        });
    };

    view! {
        <div class="auth-page register-page">
            <div class="auth-card">
                <h2>"Register"</h2>

                <Show when=move || !errors.get().is_empty()>
                    <div class="form-error">{move || errors.get()}</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        placeholder="Enter username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                            set_errors.set(String::new());
                        }
                    />

                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            set_errors.set(String::new());
                        }
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            set_errors.set(String::new());
                        }
                    />

                    <button type="submit">"Register"</button>
                </form>
            </div>
        </div>
    }
}
