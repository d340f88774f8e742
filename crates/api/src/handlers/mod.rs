//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers resolve the caller through [`AuthUser`](crate::middleware::auth::AuthUser),
//! delegate to the auth module or the resource services, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod categories;
pub mod notes;
