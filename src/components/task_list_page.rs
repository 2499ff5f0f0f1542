//! Task List Page Component
//!
//! CRUD screen for the authenticated user's tasks. The list is refetched
//! in full after every mutation; the form region toggles between create
//! mode and editing one task. Starting a different edit is the only way to
//! switch targets; a successful update drops back to create mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{TaskForm, TaskItem};
use crate::models::{Task, TaskDraft, TaskStatus};
use crate::store::{store_end_session, use_app_store, AppStateStoreFields};
use crate::validate::validate_task_draft;

#[component]
pub fn TaskListPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (edit_id, set_edit_id) = signal::<Option<i64>>(None);
    let (error, set_error) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Draft state shared with the form
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(TaskStatus::Pending);

    // Fetch the full list on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let session = store.session().get_untracked();
        web_sys::console::log_1(&format!("[TASKS] Loading list, trigger={}", trigger).into());
        spawn_local(async move {
            if let Ok(loaded) = api::list_tasks(&session).await {
                set_tasks.set(loaded);
            }
        });
    });

    let clear_draft = move || {
        title.set(String::new());
        description.set(String::new());
        status.set(TaskStatus::Pending);
    };

    // Create or update, depending on the edit target
    let on_submit = Callback::new(move |()| {
        let draft_title = title.get();
        let draft_description = description.get();

        if let Err(message) = validate_task_draft(&draft_title, &draft_description) {
            set_error.set(message);
            return;
        }
        set_error.set(String::new());

        let draft = TaskDraft {
            title: draft_title,
            description: draft_description,
            status: status.get(),
        };
        let session = store.session().get_untracked();
        let target = edit_id.get();

        spawn_local(async move {
            let result = match target {
                Some(id) => api::update_task(&session, id, &draft).await.map(|_| ()),
                None => api::create_task(&session, &draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    set_edit_id.set(None);
                    clear_draft();
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(error) => set_error.set(error.message_or("Something went wrong")),
            }
        });
    });

    // Copy the selected task into the draft and record it as the target
    let on_edit = Callback::new(move |task: Task| {
        set_edit_id.set(Some(task.id));
        title.set(task.title);
        description.set(task.description);
        status.set(task.status);
    });

    let on_delete = Callback::new(move |id: i64| {
        let session = store.session().get_untracked();
        spawn_local(async move {
            if api::delete_task(&session, id).await.is_ok() {
                set_reload_trigger.update(|v| *v += 1);
            }
        });
    });

    let on_logout = move |_| {
        store_end_session(&store);
        navigate("/", Default::default());
    };

    view! {
        <div class="task-page">
            <div class="task-card">
                <header class="task-header">
                    <h2>"My Task Manager"</h2>
                    <button class="logout-btn" on:click=on_logout>"Logout"</button>
                </header>

                <TaskForm
                    title=title
                    description=description
                    status=status
                    edit_id=edit_id
                    error=error
                    on_submit=on_submit
                />

                <ul class="task-list">
                    <Show when=move || tasks.get().is_empty()>
                        <p class="task-empty">"No tasks yet."</p>
                    </Show>
                    <For
                        each=move || tasks.get()
                        key=|task| task.id
                        children=move |task| {
                            view! {
                                <TaskItem task=task on_edit=on_edit on_delete=on_delete/>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
