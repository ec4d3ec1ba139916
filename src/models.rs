//! Frontend Models
//!
//! Data structures matching the `tasks` table and the signed-in user.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned task identifier.
///
/// Opaque to the UI: Postgres may hand back a bigint or a uuid, both are
/// kept as text and only ever compared or echoed back in filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i32> for TaskId {
    fn from(id: i32) -> Self {
        TaskId(id.to_string())
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => TaskId(n.to_string()),
            Raw::Text(s) => TaskId(s),
        })
    }
}

/// Task row (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
impl Task {
    pub fn new(id: impl Into<TaskId>, title: &str, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            completed,
        }
    }
}

impl Task {
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Not Completed"
        }
    }

    /// Completion is one-way, so the action is only offered once.
    pub fn can_complete(&self) -> bool {
        !self.completed
    }
}

/// Signed-in principal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

impl Session {
    pub fn new(user_id: &str, email: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.to_string(),
        }
    }
}

/// Login form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_id_accepts_number_or_text() {
        let rows: Vec<Task> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Buy milk", "completed": false, "user_id": "P123"},
                {"id": "3f2a", "title": "Call mom"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            rows,
            vec![Task::new(1, "Buy milk", false), Task::new("3f2a", "Call mom", false)]
        );
    }

    #[test]
    fn test_status_and_actions() {
        let open = Task::new(1, "Buy milk", false);
        let done = Task::new(1, "Buy milk", true);

        assert_eq!(open.status_label(), "Not Completed");
        assert!(open.can_complete());
        assert_eq!(done.status_label(), "Completed");
        assert!(!done.can_complete());
    }
}
