//! Route definitions for notes.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /notes              -> list_notes
/// POST   /notes              -> create_note
/// DELETE /notes/{id}         -> delete_note
/// GET    /note/{id}          -> get_note
/// PUT    /note/{id}          -> update_note
/// DELETE /note/{id}          -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/{id}", delete(notes::delete_note))
        .route(
            "/note/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
}
