//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET /        -> list_categories
/// GET /{id}    -> get_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/{id}", get(categories::get_category))
}
