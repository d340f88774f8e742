//! Repository for the `categories` table.

use notekeep_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::category::Category;

/// Column list for categories queries.
const COLUMNS: &str = "id, owner_id, name, created_at, updated_at";

/// Owner-scoped CRUD for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List the owner's categories in insertion order.
    pub async fn list<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE owner_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .fetch_all(executor)
            .await
    }

    /// Find one of the owner's categories by ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(executor)
            .await
    }

    /// Find one of the owner's categories by exact name.
    pub async fn find_by_name<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE owner_id = $1 AND name = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Create a category for the owner, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (owner_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Rename one of the owner's categories.
    ///
    /// Returns `None` if no such category belongs to the owner.
    pub async fn rename<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        id: DbId,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $3
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Delete one of the owner's categories. Returns `true` if a row was deleted.
    pub async fn delete<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
