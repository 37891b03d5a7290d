//! Role entity model.

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// A role grant row from the `roles` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
}
