pub mod category;
pub mod health;
pub mod note;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                  list, create
/// /categories/{id}             get, update
///
/// /notes                       list (?category_id, include_archived, pinned_only), create
/// /notes/{id}                  get, update, delete
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/notes", note::router())
}
