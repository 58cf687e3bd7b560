//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasklist_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub category_id: DbId,
    pub name: String,
    pub description: String,
}

/// Request body for creating or updating a category.
///
/// Missing fields decode to empty strings and are left for the store's
/// constraints to judge. Any `category_id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryPayload {
    /// Build the entity this payload describes once it is stored under `category_id`.
    pub fn into_category(self, category_id: DbId) -> Category {
        Category {
            category_id,
            name: self.name,
            description: self.description,
        }
    }
}
