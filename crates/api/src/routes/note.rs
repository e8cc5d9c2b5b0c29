//! Route definitions for notes.
//!
//! Mounted at `/notes` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// ```text
/// GET    /                   -> list_notes (?category_id, include_archived, pinned_only)
/// POST   /                   -> create_note
/// GET    /{id}               -> get_note
/// PUT    /{id}               -> update_note
/// DELETE /{id}               -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(note::list_notes).post(note::create_note))
        .route(
            "/{id}",
            get(note::get_note)
                .put(note::update_note)
                .delete(note::delete_note),
        )
}
