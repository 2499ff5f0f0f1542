//! Task Endpoints
//!
//! CRUD calls for the authenticated user's tasks. Every call carries the
//! session's bearer token alongside the cookie channel. Callers refetch
//! the full list after each mutation; nothing is patched incrementally.

use serde_json::Value;

use crate::models::{Task, TaskDraft};
use crate::session::Session;

use super::{csrf_cookie, plan_request, send, ApiError, Method};

/// GET /tasks — the full list, in server-returned order
pub async fn list_tasks(session: &Session) -> Result<Vec<Task>, ApiError> {
    let plan = plan_request::<()>(
        Method::Get,
        "/tasks",
        csrf_cookie().as_deref(),
        session.bearer_token(),
        None,
    )?;
    let response = send(plan).await?;
    Ok(parse_task_list(response.json_value()))
}

/// A non-array payload degrades to an empty list instead of an error
pub fn parse_task_list(value: Value) -> Vec<Task> {
    if value.is_array() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        Vec::new()
    }
}

/// POST /tasks — create a task from a draft
pub async fn create_task(session: &Session, draft: &TaskDraft) -> Result<Task, ApiError> {
    let plan = plan_request(
        Method::Post,
        "/tasks",
        csrf_cookie().as_deref(),
        session.bearer_token(),
        Some(draft),
    )?;
    let response = send(plan).await?;
    response.json()
}

/// PUT /tasks/{id} — submit the draft against an existing task
pub async fn update_task(session: &Session, id: i64, draft: &TaskDraft) -> Result<Task, ApiError> {
    let plan = plan_request(
        Method::Put,
        &format!("/tasks/{id}"),
        csrf_cookie().as_deref(),
        session.bearer_token(),
        Some(draft),
    )?;
    let response = send(plan).await?;
    response.json()
}

/// DELETE /tasks/{id} — 204 from the current backend; any 2xx is accepted
pub async fn delete_task(session: &Session, id: i64) -> Result<(), ApiError> {
    let plan = plan_request::<()>(
        Method::Delete,
        &format!("/tasks/{id}"),
        csrf_cookie().as_deref(),
        session.bearer_token(),
        None,
    )?;
    send(plan).await?;
    Ok(())
}
