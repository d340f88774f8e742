//! Handlers for signup, login and the current-user lookup.

use axum::extract::State;
use axum::Json;
use notekeep_core::error::CoreError;
use notekeep_db::models::user::UserResponse;
use notekeep_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::credentials::CredentialStore;
use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup` and `POST /login`.
///
/// Missing fields deserialize as empty strings so they are reported as
/// validation errors rather than body rejections.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Always `"Bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Register a new user. Returns the user without any credential material.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CredentialsRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let mut tx = state.pool.begin().await?;
    let user = CredentialStore::register(&mut tx, &input.username, &input.password).await?;
    tx.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "User signed up");

    Ok(Json(DataResponse { data: user.into() }))
}

/// POST /login
///
/// Verify username + password and issue an access token.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    let mut conn = state.pool.acquire().await?;
    let user = CredentialStore::verify(&mut conn, &input.username, &input.password)
        .await
        .inspect_err(|err| {
            tracing::debug!(username = %input.username.trim(), error = %err, "Login failed");
        })?;

    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.access_token_ttl_secs(),
        user: user.into(),
    }))
}

/// GET /me
///
/// Return the authenticated user's profile.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        })?;

    Ok(Json(DataResponse { data: user.into() }))
}
