pub mod auth;
pub mod categories;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                     login (public)
///
/// /products                       list, save (save requires admin)
/// /products/price-range           price-range query
/// /products/{id}                  get, delete (delete requires admin)
///
/// /categories                     list
/// /categories/{id}                get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", products::router())
        .nest("/categories", categories::router())
}
