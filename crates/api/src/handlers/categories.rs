//! Read-only handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use storefront_core::catalog::ENTITY_CATEGORY;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::query::ActiveOnlyParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories?active_only=true
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ActiveOnlyParams>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool, params.active_only).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_CATEGORY,
            id,
        }))?;

    Ok(Json(DataResponse { data: category }))
}
