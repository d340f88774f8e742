pub mod auth;
pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /signup                                          register (POST)
/// /login                                           issue token (POST)
/// /me                                              current user (GET)
///
/// /categories                                      list, create
/// /category/{id}                                   get, update, delete
/// /category/{id}/notes                             notes in category
///
/// /notes                                           list, create
/// /notes/{id}                                      delete
/// /note/{id}                                       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(categories::router())
        .merge(notes::router())
}
