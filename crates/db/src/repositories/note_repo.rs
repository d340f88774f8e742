//! Repository for the `notes` table.

use notekeep_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries. Every query aliases `notes` as `n` and
/// left-joins `categories` as `c` to carry the category name.
const COLUMNS: &str = "n.id, n.owner_id, n.title, n.content, n.category_id, \
                       c.name AS category, n.created_at, n.updated_at";

/// Owner-scoped CRUD for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List the owner's notes in insertion order.
    pub async fn list<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.owner_id = $1
             ORDER BY n.id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .fetch_all(executor)
            .await
    }

    /// List the owner's notes filed under one category.
    pub async fn list_by_category<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        category_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.owner_id = $1 AND n.category_id = $2
             ORDER BY n.id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(category_id)
            .fetch_all(executor)
            .await
    }

    /// Count the owner's notes filed under one category.
    pub async fn count_by_category<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        category_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notes WHERE owner_id = $1 AND category_id = $2",
        )
        .bind(owner_id)
        .bind(category_id)
        .fetch_one(executor)
        .await
    }

    /// Find one of the owner's notes by ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.id = $1 AND n.owner_id = $2"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(executor)
            .await
    }

    /// Find one of the owner's notes by exact title.
    pub async fn find_by_title<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        title: &str,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes n
             LEFT JOIN categories c ON c.id = n.category_id
             WHERE n.owner_id = $1 AND n.title = $2"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(title)
            .fetch_optional(executor)
            .await
    }

    /// Create a note for the owner, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO notes (owner_id, title, content, category_id)
                VALUES ($1, $2, $3, $4)
                RETURNING *
             )
             SELECT {COLUMNS} FROM inserted n
             LEFT JOIN categories c ON c.id = n.category_id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .fetch_one(executor)
            .await
    }

    /// Apply a partial update to one of the owner's notes.
    ///
    /// `created_at` is never written. Returns `None` if no such note belongs to
    /// the owner.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "WITH updated AS (
                UPDATE notes SET
                    title = COALESCE($3, title),
                    content = CASE WHEN $4 THEN $5 ELSE content END,
                    category_id = CASE WHEN $6 THEN $7 ELSE category_id END
                WHERE id = $1 AND owner_id = $2
                RETURNING *
             )
             SELECT {COLUMNS} FROM updated n
             LEFT JOIN categories c ON c.id = n.category_id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(input.content.is_some())
            .bind(input.content.as_ref().and_then(|c| c.as_deref()))
            .bind(input.category_id.is_some())
            .bind(input.category_id.flatten())
            .fetch_optional(executor)
            .await
    }

    /// Clear `category_id` on every note of the owner filed under the category.
    ///
    /// Returns the number of notes detached.
    pub async fn detach_category<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        category_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET category_id = NULL WHERE owner_id = $1 AND category_id = $2",
        )
        .bind(owner_id)
        .bind(category_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete one of the owner's notes. Returns `true` if a row was deleted.
    pub async fn delete<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
