//! HTTP-level integration tests for the task endpoints nested under
//! `/category/{category_id}`.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_string, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn add_category(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING category_id",
    )
    .bind("Test Category")
    .bind("Test Category Description")
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

async fn add_task(pool: &PgPool, category_id: i64, text: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO tasks (category_id, task, complete) VALUES ($1, $2, $3) RETURNING task_id",
    )
    .bind(category_id)
    .bind(text)
    .bind(false)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_tasks_table(pool: PgPool) {
    let category_id = add_category(&pool).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/category/{category_id}/tasks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "[]");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_task(pool: PgPool) {
    let category_id = add_category(&pool).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/category/{category_id}/task/999"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Task not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task(pool: PgPool) {
    let category_id = add_category(&pool).await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/category/{category_id}/task"),
        serde_json::json!({"task": "Test task", "complete": false, "category_id": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["task"], "Test task");
    assert_eq!(json["complete"], false);
    // The path decides the owner, not the body.
    assert_eq!(json["category_id"], category_id);
    assert!(json["task_id"].is_i64());
    assert!(json["seq"].is_i64());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_under_missing_category_is_500(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/category/424242/task",
        serde_json::json!({"task": "Orphan", "complete": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fetch_task(pool: PgPool) {
    let category_id = add_category(&pool).await;
    let ids = [
        add_task(&pool, category_id, "Task 0").await,
        add_task(&pool, category_id, "Task 1").await,
    ];

    for (i, task_id) in ids.into_iter().enumerate() {
        let response = get(
            common::build_test_app(pool.clone()),
            &format!("/category/{category_id}/task/{task_id}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["task"], format!("Task {i}"));
        assert_eq!(json["category_id"], category_id);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fetch_task_ignores_category_in_path(pool: PgPool) {
    let owner = add_category(&pool).await;
    let other = add_category(&pool).await;
    let task_id = add_task(&pool, owner, "Shared lookup").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/category/{other}/task/{task_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["category_id"], owner);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fetch_all_tasks(pool: PgPool) {
    let category_id = add_category(&pool).await;
    let other = add_category(&pool).await;
    for i in 0..3 {
        add_task(&pool, category_id, &format!("Task {i}")).await;
    }
    add_task(&pool, other, "Elsewhere").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/category/{category_id}/tasks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tasks = json.as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    assert!(tasks.iter().all(|t| t["category_id"] == category_id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task(pool: PgPool) {
    let category_id = add_category(&pool).await;
    let task_id = add_task(&pool, category_id, "Test Task").await;

    let original = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/category/{category_id}/task/{task_id}"),
        )
        .await,
    )
    .await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/category/{category_id}/task/{task_id}"),
        serde_json::json!({"task": "updated task", "complete": true, "seq": 99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["task_id"], original["task_id"]);
    assert_eq!(updated["category_id"], original["category_id"]);
    assert_eq!(updated["seq"], original["seq"]);
    assert_eq!(updated["task"], "updated task");
    assert_eq!(updated["complete"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_task_echoes_request(pool: PgPool) {
    let category_id = add_category(&pool).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/category/{category_id}/task/8080"),
        serde_json::json!({"task": "Nowhere", "complete": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["task_id"], 8080);
    assert_eq!(json["category_id"], category_id);
    assert_eq!(json["task"], "Nowhere");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_task(pool: PgPool) {
    let category_id = add_category(&pool).await;
    let task_id = add_task(&pool, category_id, "Test Task").await;
    let uri = format!("/category/{category_id}/task/{task_id}");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["result"], "success");

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Task not found");

    // A second delete of the same id is a no-op.
    let response = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
}
