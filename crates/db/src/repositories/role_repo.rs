//! Repository for the `roles` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::role::Role;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, user_id, created_at";

/// Provides role grant operations.
pub struct RoleRepo;

impl RoleRepo {
    /// Grant the role `name` to a user, returning the created row.
    pub async fn grant(pool: &PgPool, user_id: DbId, name: &str) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (name, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// List a user's roles in grant order (ID ascending).
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE user_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Role>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
