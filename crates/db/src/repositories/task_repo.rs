//! Repository for the `tasks` table.

use sqlx::PgPool;
use tasklist_core::types::DbId;

use crate::models::task::{Task, TaskPayload};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "task_id, category_id, task, seq, complete";

/// Provides CRUD operations for tasks.
///
/// Single-task lookups are keyed by `task_id` alone; the owning category
/// is only consulted on insert and when listing.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task under `category_id`. `seq` takes the store default.
    pub async fn create(
        pool: &PgPool,
        category_id: DbId,
        input: &TaskPayload,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (category_id, task, complete)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(category_id)
            .bind(&input.task)
            .bind(input.complete)
            .fetch_one(pool)
            .await
    }

    /// Find a task by id. `None` means no row matched.
    pub async fn find_by_id(pool: &PgPool, task_id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE task_id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .fetch_optional(pool)
            .await
    }

    /// List the tasks owned by a category, in the store's scan order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE category_id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a task's text and completion flag. `category_id` and `seq`
    /// are never touched.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        task_id: DbId,
        input: &TaskPayload,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET task = $2, complete = $3
             WHERE task_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .bind(&input.task)
            .bind(input.complete)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by id. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, task_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE task_id = $1")
            .bind(task_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
