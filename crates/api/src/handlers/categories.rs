//! Handlers for the category resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notekeep_core::types::DbId;
use notekeep_db::models::category::{CreateCategory, UpdateCategory};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, Deleted};
use crate::services::CategoryService;
use crate::state::AppState;

/// Query parameters for `DELETE /category/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteCategoryParams {
    /// Null out the category on referencing notes instead of refusing.
    #[serde(default)]
    pub detach_notes: bool,
}

/// POST /categories
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let category = CategoryService::create(&mut tx, auth.user_id, &input).await?;
    tx.commit().await?;

    tracing::info!(
        user_id = auth.user_id,
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /categories
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let categories = CategoryService::list(&mut conn, auth.user_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /category/{id}
pub async fn get_category(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let category = CategoryService::get(&mut conn, auth.user_id, id).await?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /category/{id}
pub async fn update_category(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let category = CategoryService::update(&mut tx, auth.user_id, id, &input).await?;
    tx.commit().await?;

    tracing::info!(user_id = auth.user_id, category_id = id, "Category renamed");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /category/{id}?detach_notes=
///
/// Refuses with 409 while notes reference the category, unless
/// `detach_notes=true`.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    QueryParams(params): QueryParams<DeleteCategoryParams>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    CategoryService::delete(&mut tx, auth.user_id, id, params.detach_notes).await?;
    tx.commit().await?;

    tracing::info!(
        user_id = auth.user_id,
        category_id = id,
        detach_notes = params.detach_notes,
        "Category deleted"
    );

    Ok(Json(DataResponse { data: Deleted { id } }))
}

/// GET /category/{id}/notes
pub async fn list_category_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let listing = CategoryService::notes_of(&mut conn, auth.user_id, id).await?;
    Ok(Json(DataResponse { data: listing }))
}
