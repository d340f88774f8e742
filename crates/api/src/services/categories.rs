//! Category operations.

use notekeep_core::error::CoreError;
use notekeep_core::types::DbId;
use notekeep_core::validation::{require_text, validate_input, MAX_CATEGORY_NAME_LENGTH};
use notekeep_db::constraints::{
    is_foreign_key_violation, is_unique_violation, FK_NOTES_CATEGORY_OWNER,
    UQ_CATEGORIES_OWNER_NAME,
};
use notekeep_db::models::category::{Category, CreateCategory, UpdateCategory};
use notekeep_db::models::note::Note;
use notekeep_db::repositories::{CategoryRepo, NoteRepo};
use serde::Serialize;
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};

/// A category together with the notes filed under it.
#[derive(Debug, Serialize)]
pub struct CategoryNotes {
    pub category: Category,
    pub count: usize,
    pub notes: Vec<Note>,
}

pub struct CategoryService;

impl CategoryService {
    pub async fn create(
        conn: &mut PgConnection,
        owner_id: DbId,
        input: &CreateCategory,
    ) -> AppResult<Category> {
        let name = require_text("name", &input.name, MAX_CATEGORY_NAME_LENGTH)?;
        // Length bounds apply to the trimmed name.
        validate_input(&CreateCategory {
            name: name.to_string(),
        })?;

        if CategoryRepo::find_by_name(&mut *conn, owner_id, name)
            .await?
            .is_some()
        {
            return Err(duplicate(name).into());
        }

        CategoryRepo::create(&mut *conn, owner_id, name)
            .await
            .map_err(|err| name_conflict(err, name))
    }

    pub async fn list(conn: &mut PgConnection, owner_id: DbId) -> AppResult<Vec<Category>> {
        Ok(CategoryRepo::list(&mut *conn, owner_id).await?)
    }

    pub async fn get(conn: &mut PgConnection, owner_id: DbId, id: DbId) -> AppResult<Category> {
        CategoryRepo::find_by_id(&mut *conn, owner_id, id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Rename a category. `name` is required since it is the only mutable field.
    pub async fn update(
        conn: &mut PgConnection,
        owner_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> AppResult<Category> {
        Self::get(&mut *conn, owner_id, id).await?;

        let name = input
            .name
            .as_deref()
            .ok_or_else(|| CoreError::InvalidInput("name is required".into()))?;
        let name = require_text("name", name, MAX_CATEGORY_NAME_LENGTH)?;
        validate_input(&UpdateCategory {
            name: Some(name.to_string()),
        })?;

        if let Some(existing) = CategoryRepo::find_by_name(&mut *conn, owner_id, name).await? {
            if existing.id != id {
                return Err(duplicate(name).into());
            }
        }

        CategoryRepo::rename(&mut *conn, owner_id, id, name)
            .await
            .map_err(|err| name_conflict(err, name))?
            .ok_or_else(|| not_found(id).into())
    }

    /// Delete a category.
    ///
    /// A category that notes still reference is rejected with `CategoryInUse`
    /// unless `detach_notes` is set, in which case those notes lose their
    /// category first. Run inside a transaction so the two steps land together.
    pub async fn delete(
        conn: &mut PgConnection,
        owner_id: DbId,
        id: DbId,
        detach_notes: bool,
    ) -> AppResult<()> {
        Self::get(&mut *conn, owner_id, id).await?;

        if detach_notes {
            let detached = NoteRepo::detach_category(&mut *conn, owner_id, id).await?;
            tracing::debug!(owner_id, category_id = id, detached, "Detached notes from category");
        } else if NoteRepo::count_by_category(&mut *conn, owner_id, id).await? > 0 {
            return Err(CoreError::CategoryInUse(id).into());
        }

        // The FK still guards against a note filed concurrently after the count.
        let deleted = CategoryRepo::delete(&mut *conn, owner_id, id)
            .await
            .map_err(|err| -> AppError {
                if is_foreign_key_violation(&err, FK_NOTES_CATEGORY_OWNER) {
                    CoreError::CategoryInUse(id).into()
                } else {
                    err.into()
                }
            })?;

        if !deleted {
            return Err(not_found(id).into());
        }
        Ok(())
    }

    /// The category plus its notes, ordered by note id.
    pub async fn notes_of(
        conn: &mut PgConnection,
        owner_id: DbId,
        id: DbId,
    ) -> AppResult<CategoryNotes> {
        let category = Self::get(&mut *conn, owner_id, id).await?;
        let notes = NoteRepo::list_by_category(&mut *conn, owner_id, id).await?;
        Ok(CategoryNotes {
            category,
            count: notes.len(),
            notes,
        })
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Category",
        id,
    }
}

fn duplicate(name: &str) -> CoreError {
    CoreError::DuplicateName {
        entity: "Category",
        name: name.to_string(),
    }
}

fn name_conflict(err: sqlx::Error, name: &str) -> AppError {
    if is_unique_violation(&err, UQ_CATEGORIES_OWNER_NAME) {
        duplicate(name).into()
    } else {
        err.into()
    }
}
