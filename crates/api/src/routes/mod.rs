pub mod category;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                       list
/// /category                                         create
/// /category/{category_id}                           get, update, delete (cascades to tasks)
/// /category/{category_id}/tasks                     list tasks
/// /category/{category_id}/task                      create task
/// /category/{category_id}/task/{task_id}            get, update, delete task
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(category::router())
}
