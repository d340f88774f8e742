//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET    /categories             -> list_categories
/// POST   /categories             -> create_category
/// GET    /category/{id}          -> get_category
/// PUT    /category/{id}          -> update_category
/// DELETE /category/{id}          -> delete_category (?detach_notes)
/// GET    /category/{id}/notes    -> list_category_notes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/category/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/category/{id}/notes", get(categories::list_category_notes))
}
