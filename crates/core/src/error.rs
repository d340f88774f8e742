use crate::types::DbId;

/// Domain-level failures shared by every layer.
///
/// The API crate maps each variant to a stable HTTP status and error code, so
/// variants that look alike externally (the three 401 cases, for example) stay
/// distinct here for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    InvalidInput(String),

    #[error("{entity} named '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },

    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Category with id {0} not found")]
    CategoryNotFound(DbId),

    #[error("Category with id {0} still has notes attached")]
    CategoryInUse(DbId),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid access token")]
    TokenInvalid,

    #[error("Access token has expired")]
    TokenExpired,

    #[error("Internal error: {0}")]
    Internal(String),
}
