//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub description: String,
    pub image_path: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub description: String,
    pub image_path: Option<String>,
    pub active: Option<bool>,
}
