//! Route definitions for categories and their nested tasks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{category, task};
use crate::state::AppState;

/// Category and task routes, mounted at the root.
///
/// ```text
/// GET    /categories                               -> category::list
/// POST   /category                                 -> category::create
/// GET    /category/{category_id}                   -> category::get_by_id
/// PUT    /category/{category_id}                   -> category::update
/// DELETE /category/{category_id}                   -> category::delete
///
/// GET    /category/{category_id}/tasks             -> task::list_by_category
/// POST   /category/{category_id}/task              -> task::create
/// GET    /category/{category_id}/task/{task_id}    -> task::get_by_id
/// PUT    /category/{category_id}/task/{task_id}    -> task::update
/// DELETE /category/{category_id}/task/{task_id}    -> task::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route("/category", post(category::create))
        .route(
            "/category/{category_id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/category/{category_id}/tasks", get(task::list_by_category))
        .route("/category/{category_id}/task", post(task::create))
        .route(
            "/category/{category_id}/task/{task_id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
}
