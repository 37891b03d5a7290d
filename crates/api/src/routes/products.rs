//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /              -> list_products
/// POST   /              -> save_product
/// GET    /price-range   -> query_by_price_range
/// GET    /{id}          -> get_product
/// DELETE /{id}          -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::save_product),
        )
        .route("/price-range", get(products::query_by_price_range))
        .route(
            "/{id}",
            get(products::get_product).delete(products::delete_product),
        )
}
