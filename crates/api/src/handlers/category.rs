//! Handlers for the category resource.
//!
//! Categories are addressed as `/categories` (collection) and
//! `/category[/{category_id}]` (single entity).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tasklist_db::models::category::{Category, CategoryPayload};
use tasklist_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{CategoryPath, JsonBody};
use crate::response::ResultResponse;
use crate::state::AppState;

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /category
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CategoryPayload>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.category_id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /category/{category_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CategoryPath(id): CategoryPath,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Category", id))?;
    Ok(Json(category))
}

/// PUT /category/{category_id}
///
/// The id in the path wins over any id in the body.
pub async fn update(
    State(state): State<AppState>,
    CategoryPath(id): CategoryPath,
    JsonBody(input): JsonBody<CategoryPayload>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, id, &input).await?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /category/{category_id}
///
/// Removes the category's tasks first, then the category. With
/// `atomic_cascade_delete` off, the two deletes are independent: if the
/// second fails, the tasks stay deleted and the category survives.
pub async fn delete(
    State(state): State<AppState>,
    CategoryPath(id): CategoryPath,
) -> AppResult<Json<ResultResponse>> {
    if state.config.atomic_cascade_delete {
        let removed = CategoryRepo::delete_with_tasks(&state.pool, id).await?;
        tracing::info!(category_id = id, removed, "Category deleted");
    } else {
        let tasks_removed = CategoryRepo::delete_tasks(&state.pool, id).await?;
        let removed = CategoryRepo::delete(&state.pool, id).await.inspect_err(|err| {
            tracing::warn!(
                category_id = id,
                tasks_removed,
                error = %err,
                "Category delete failed after its tasks were removed",
            );
        })?;
        tracing::info!(category_id = id, tasks_removed, removed, "Category deleted");
    }

    Ok(Json(ResultResponse::success()))
}
