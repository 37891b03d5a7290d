//! Handlers for the `/products` resource.
//!
//! Reads are public; `save` and `delete` require the `ADMIN` authority.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use storefront_core::catalog::ENTITY_PRODUCT;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::product::SaveProduct;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{ActiveOnlyParams, PriceRangeParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products?active_only=true
///
/// List products in id order, optionally only the active ones.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ActiveOnlyParams>,
) -> AppResult<impl IntoResponse> {
    let products = state.catalog.list_products(params.active_only).await?;
    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = state
        .catalog
        .get_product(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_PRODUCT,
            id,
        }))?;

    Ok(Json(DataResponse { data: product }))
}

/// POST /api/v1/products
///
/// Insert when the body has no `id` (201), otherwise merge into the existing
/// product (200). An unknown `id` is 404 and writes nothing.
pub async fn save_product(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SaveProduct>,
) -> AppResult<impl IntoResponse> {
    let is_insert = input.id.is_none();
    let product = state.catalog.save(&input).await?;

    tracing::info!(
        product_id = product.id,
        username = %admin.username,
        is_insert,
        "Product saved",
    );

    let status = if is_insert {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: product })))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.catalog.delete(id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY_PRODUCT,
            id,
        }));
    }

    tracing::info!(product_id = id, username = %admin.username, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/products/price-range?low=&high=
///
/// Products priced within `[low, high]`, ordered by description.
pub async fn query_by_price_range(
    State(state): State<AppState>,
    Query(params): Query<PriceRangeParams>,
) -> AppResult<impl IntoResponse> {
    let products = state
        .catalog
        .query_by_price_range(params.low, params.high)
        .await?;
    Ok(Json(DataResponse { data: products }))
}
