//! Frontend Models
//!
//! Wire-level data structures matching the backend API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task status as the backend stores it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// Parse a `<select>` value; anything unrecognized falls back to pending
    pub fn from_value(value: &str) -> Self {
        match value {
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task data structure (matches backend; extra fields like timestamps are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error payload the backend attaches to failed requests
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Mutation body for task create/update
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&TaskStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&TaskStatus::Completed).unwrap(), "\"completed\"");

        let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
    }

    #[test]
    fn test_task_decodes_backend_payload() {
        // The backend also sends timestamps; the client only keeps what it renders
        let raw = r#"{
            "id": 42,
            "title": "Write report",
            "description": "",
            "status": "pending",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-02T00:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, 42);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Pending);
    }
}
