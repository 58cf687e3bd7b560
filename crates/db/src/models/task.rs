//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklist_core::types::DbId;

/// A row from the `tasks` table.
///
/// `seq` is assigned by the store on insert and is not writable through
/// any payload.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub task_id: DbId,
    pub category_id: DbId,
    pub task: String,
    pub seq: i32,
    pub complete: bool,
}

/// Request body for creating or updating a task.
///
/// The owning category always comes from the route, never from the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub complete: bool,
}

impl TaskPayload {
    /// Echo of the payload under the given ids, used when an update
    /// matched no stored row.
    pub fn into_task(self, task_id: DbId, category_id: DbId) -> Task {
        Task {
            task_id,
            category_id,
            task: self.task,
            seq: 0,
            complete: self.complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_ids_and_seq_in_body() {
        let payload: TaskPayload = serde_json::from_str(
            r#"{"task_id": 3, "category_id": 4, "seq": 9, "task": "Buy milk", "complete": true}"#,
        )
        .unwrap();
        let task = payload.into_task(10, 20);
        assert_eq!(task.task_id, 10);
        assert_eq!(task.category_id, 20);
        assert_eq!(task.seq, 0);
        assert_eq!(task.task, "Buy milk");
        assert!(task.complete);
    }

    #[test]
    fn payload_defaults_complete_to_false() {
        let payload: TaskPayload = serde_json::from_str(r#"{"task": "Write"}"#).unwrap();
        assert!(!payload.complete);
    }

    #[test]
    fn task_serializes_with_wire_field_names() {
        let task = Task {
            task_id: 1,
            category_id: 2,
            task: "Test task".into(),
            seq: 1,
            complete: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["task_id"], 1);
        assert_eq!(json["category_id"], 2);
        assert_eq!(json["task"], "Test task");
        assert_eq!(json["seq"], 1);
        assert_eq!(json["complete"], false);
    }
}
