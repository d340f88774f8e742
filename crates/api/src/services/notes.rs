//! Note operations.

use notekeep_core::error::CoreError;
use notekeep_core::types::DbId;
use notekeep_core::validation::{
    check_max_length, require_text, validate_input, MAX_NOTE_CONTENT_LENGTH,
    MAX_NOTE_TITLE_LENGTH,
};
use notekeep_db::constraints::{
    is_foreign_key_violation, is_unique_violation, FK_NOTES_CATEGORY_OWNER, UQ_NOTES_OWNER_TITLE,
};
use notekeep_db::models::note::{CreateNote, Note, UpdateNote};
use notekeep_db::repositories::{CategoryRepo, NoteRepo};
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};

pub struct NoteService;

impl NoteService {
    /// Create a note for `owner_id`.
    ///
    /// The title is trimmed and must be unique among the owner's notes. A
    /// `category_id`, when given, must name one of the owner's categories;
    /// anyone else's category is reported exactly like a missing one.
    pub async fn create(
        conn: &mut PgConnection,
        owner_id: DbId,
        input: &CreateNote,
    ) -> AppResult<Note> {
        let title = require_text("title", &input.title, MAX_NOTE_TITLE_LENGTH)?;
        let normalized = CreateNote {
            title: title.to_string(),
            content: input.content.clone(),
            category_id: input.category_id,
        };
        validate_input(&normalized)?;

        if NoteRepo::find_by_title(&mut *conn, owner_id, title)
            .await?
            .is_some()
        {
            return Err(duplicate(title).into());
        }
        if let Some(category_id) = input.category_id {
            ensure_category(&mut *conn, owner_id, category_id).await?;
        }

        NoteRepo::create(&mut *conn, owner_id, &normalized)
            .await
            .map_err(|err| write_conflict(err, title, input.category_id))
    }

    pub async fn list(conn: &mut PgConnection, owner_id: DbId) -> AppResult<Vec<Note>> {
        Ok(NoteRepo::list(&mut *conn, owner_id).await?)
    }

    pub async fn get(conn: &mut PgConnection, owner_id: DbId, id: DbId) -> AppResult<Note> {
        NoteRepo::find_by_id(&mut *conn, owner_id, id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Apply a partial update. Absent fields keep their value; `created_at`
    /// never changes.
    pub async fn update(
        conn: &mut PgConnection,
        owner_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> AppResult<Note> {
        let current = Self::get(&mut *conn, owner_id, id).await?;

        let title = match input.title.as_deref() {
            Some(title) => Some(require_text("title", title, MAX_NOTE_TITLE_LENGTH)?),
            None => None,
        };
        let normalized = UpdateNote {
            title: title.map(str::to_string),
            content: input.content.clone(),
            category_id: input.category_id,
        };
        validate_input(&normalized)?;
        // `validator` does not reach inside the nested option.
        if let Some(Some(content)) = &normalized.content {
            check_max_length("content", content, MAX_NOTE_CONTENT_LENGTH)?;
        }

        if let Some(title) = title {
            if let Some(existing) = NoteRepo::find_by_title(&mut *conn, owner_id, title).await? {
                if existing.id != id {
                    return Err(duplicate(title).into());
                }
            }
        }
        if let Some(Some(category_id)) = input.category_id {
            if current.category_id != Some(category_id) {
                ensure_category(&mut *conn, owner_id, category_id).await?;
            }
        }

        let effective_title = title.unwrap_or(current.title.as_str());
        NoteRepo::update(&mut *conn, owner_id, id, &normalized)
            .await
            .map_err(|err| write_conflict(err, effective_title, input.category_id.flatten()))?
            .ok_or_else(|| not_found(id).into())
    }

    pub async fn delete(conn: &mut PgConnection, owner_id: DbId, id: DbId) -> AppResult<()> {
        if !NoteRepo::delete(&mut *conn, owner_id, id).await? {
            return Err(not_found(id).into());
        }
        Ok(())
    }
}

/// Fail with `CategoryNotFound` unless the owner has a category `category_id`.
async fn ensure_category(
    conn: &mut PgConnection,
    owner_id: DbId,
    category_id: DbId,
) -> Result<(), AppError> {
    CategoryRepo::find_by_id(&mut *conn, owner_id, category_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| CoreError::CategoryNotFound(category_id).into())
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Note", id }
}

fn duplicate(title: &str) -> CoreError {
    CoreError::DuplicateName {
        entity: "Note",
        name: title.to_string(),
    }
}

/// Translate constraint violations raised by a note insert or update.
fn write_conflict(err: sqlx::Error, title: &str, category_id: Option<DbId>) -> AppError {
    if is_unique_violation(&err, UQ_NOTES_OWNER_TITLE) {
        return duplicate(title).into();
    }
    match category_id {
        Some(category_id) if is_foreign_key_violation(&err, FK_NOTES_CATEGORY_OWNER) => {
            CoreError::CategoryNotFound(category_id).into()
        }
        _ => err.into(),
    }
}
