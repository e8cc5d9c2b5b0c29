//! Route definitions for categories.
//!
//! Mounted at `/categories` by `api_routes()`. Categories have no
//! DELETE route.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// GET    /                   -> list_categories
/// POST   /                   -> create_category
/// GET    /{id}               -> get_category
/// PUT    /{id}               -> update_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/{id}",
            get(category::get_category).put(category::update_category),
        )
}
