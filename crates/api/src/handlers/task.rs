//! Handlers for the task resource.
//!
//! Tasks are nested under categories:
//! `/category/{category_id}/tasks` and `/category/{category_id}/task[/{task_id}]`.
//!
//! The category segment stamps new tasks and filters the list. Single-task
//! reads, updates and deletes go by `task_id` alone and do not check that
//! the task belongs to the category in the path.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tasklist_db::models::task::{Task, TaskPayload};
use tasklist_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{CategoryPath, JsonBody, TaskPath};
use crate::response::ResultResponse;
use crate::state::AppState;

/// GET /category/{category_id}/tasks
pub async fn list_by_category(
    State(state): State<AppState>,
    CategoryPath(category_id): CategoryPath,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_category(&state.pool, category_id).await?;
    Ok(Json(tasks))
}

/// POST /category/{category_id}/task
///
/// The owning category always comes from the path.
pub async fn create(
    State(state): State<AppState>,
    CategoryPath(category_id): CategoryPath,
    JsonBody(input): JsonBody<TaskPayload>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, category_id, &input).await?;

    tracing::info!(category_id, task_id = task.task_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /category/{category_id}/task/{task_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    TaskPath { task_id, .. }: TaskPath,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::not_found("Task", task_id))?;
    Ok(Json(task))
}

/// PUT /category/{category_id}/task/{task_id}
///
/// Updates the task text and completion flag. An id that matches no row
/// still answers 200 with the request echoed back.
pub async fn update(
    State(state): State<AppState>,
    TaskPath { category_id, task_id }: TaskPath,
    JsonBody(input): JsonBody<TaskPayload>,
) -> AppResult<Json<Task>> {
    let task = match TaskRepo::update(&state.pool, task_id, &input).await? {
        Some(task) => task,
        None => {
            tracing::debug!(task_id, "Task update matched no row");
            input.into_task(task_id, category_id)
        }
    };

    tracing::info!(task_id, "Task updated");

    Ok(Json(task))
}

/// DELETE /category/{category_id}/task/{task_id}
pub async fn delete(
    State(state): State<AppState>,
    TaskPath { task_id, .. }: TaskPath,
) -> AppResult<Json<ResultResponse>> {
    let removed = TaskRepo::delete(&state.pool, task_id).await?;

    tracing::info!(task_id, removed, "Task deleted");

    Ok(Json(ResultResponse::success()))
}
