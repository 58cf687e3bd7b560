//! Repository for the `categories` table.
//!
//! Also owns the bulk removal of a category's tasks, which callers run
//! before deleting the category row itself.

use sqlx::PgPool;
use tasklist_core::types::DbId;

use crate::models::category::{Category, CategoryPayload};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "category_id, name, description";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning it with its assigned id.
    pub async fn create(pool: &PgPool, input: &CategoryPayload) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by id. `None` means no row matched.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE category_id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in the store's scan order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Overwrite a category's name and description.
    ///
    /// An id with no matching row is not an error: the call reports the
    /// values it was asked to write, so callers cannot use it to detect a
    /// missing category.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryPayload,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, description = $3
             WHERE category_id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await?;

        Ok(updated.unwrap_or_else(|| input.clone().into_category(id)))
    }

    /// Delete the category row. Returns the number of rows removed.
    ///
    /// Fails with a foreign key violation while tasks still reference it;
    /// run [`CategoryRepo::delete_tasks`] first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every task owned by the category. Returns the number of tasks removed.
    pub async fn delete_tasks(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE category_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the category's tasks and then the category in one transaction.
    ///
    /// Either both deletes commit or neither does. Returns the number of
    /// category rows removed.
    pub async fn delete_with_tasks(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tasks = sqlx::query("DELETE FROM tasks WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let category = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            category_id = id,
            tasks_removed = tasks.rows_affected(),
            "Category deleted with its tasks in one transaction",
        );

        Ok(category.rows_affected())
    }
}
