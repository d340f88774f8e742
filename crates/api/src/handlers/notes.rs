//! Handlers for the note resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notekeep_core::types::DbId;
use notekeep_db::models::note::{CreateNote, UpdateNote};

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, Deleted};
use crate::services::NoteService;
use crate::state::AppState;

/// POST /notes
///
/// Any `owner_id` in the body is ignored; the note belongs to the caller.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateNote>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let note = NoteService::create(&mut tx, auth.user_id, &input).await?;
    tx.commit().await?;

    tracing::info!(
        user_id = auth.user_id,
        note_id = note.id,
        category_id = ?note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /notes
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let notes = NoteService::list(&mut conn, auth.user_id).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// GET /note/{id}
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let note = NoteService::get(&mut conn, auth.user_id, id).await?;
    Ok(Json(DataResponse { data: note }))
}

/// PUT /note/{id}
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let note = NoteService::update(&mut tx, auth.user_id, id, &input).await?;
    tx.commit().await?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note updated");

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /notes/{id} (also mounted at DELETE /note/{id})
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    NoteService::delete(&mut tx, auth.user_id, id).await?;
    tx.commit().await?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note deleted");

    Ok(Json(DataResponse { data: Deleted { id } }))
}
