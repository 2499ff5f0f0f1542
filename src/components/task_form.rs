//! Task Form Component
//!
//! Draft editor for creating a task or updating the one being edited. The
//! submit label follows the edit state.

use leptos::prelude::*;

use crate::models::TaskStatus;

#[component]
pub fn TaskForm(
    title: RwSignal<String>,
    description: RwSignal<String>,
    status: RwSignal<TaskStatus>,
    edit_id: ReadSignal<Option<i64>>,
    error: ReadSignal<String>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="task-form" on:submit=submit>
            <Show when=move || !error.get().is_empty()>
                <p class="form-error">{move || error.get()}</p>
            </Show>

            <input
                type="text"
                placeholder="Task title (required, max 255)"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />

            <textarea
                placeholder="Task description (optional, max 5000)"
                rows=3
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>

            <select
                prop:value=move || status.get().as_str()
                on:change=move |ev| status.set(TaskStatus::from_value(&event_target_value(&ev)))
            >
                <option value="pending">"Pending"</option>
                <option value="completed">"Completed"</option>
            </select>

            <button type="submit">
                {move || if edit_id.get().is_some() { "Update Task" } else { "Add Task" }}
            </button>
        </form>
    }
}
