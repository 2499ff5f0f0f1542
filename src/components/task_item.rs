//! Task Item Component
//!
//! One row of the task list with edit/delete actions.

use leptos::prelude::*;

use crate::models::{Task, TaskStatus};

#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.status == TaskStatus::Completed;
    let title_class = if completed { "task-title completed" } else { "task-title" };
    let badge_class = if completed { "status-badge completed" } else { "status-badge pending" };
    let status_label = task.status.to_string();
    let edit_task = task.clone();

    view! {
        <li class="task-item">
            <div class="task-item-row">
                <h2 class=title_class>{task.title.clone()}</h2>
                <div class="task-actions">
                    <button class="edit-btn" on:click=move |_| on_edit.run(edit_task.clone())>
                        "Edit"
                    </button>
                    <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                        "Delete"
                    </button>
                </div>
            </div>

            {(!task.description.is_empty()).then(|| view! {
                <p class="task-description">{task.description.clone()}</p>
            })}

            <span class=badge_class>{status_label}</span>
        </li>
    }
}
