//! Secure-Todo Frontend App
//!
//! Router shell over the three screens: login, registration, task list.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{LoginPage, RegisterPage, TaskListPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Session restored from storage, shared with every screen
    provide_context(Store::new(AppState::new()));

    view! {
        <Router>
            <Routes fallback=|| view! { <LoginPage/> }>
                <Route path=path!("/") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/todos") view=TaskListPage/>
            </Routes>
        </Router>
    }
}
