//! Repository for the `categories` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, image_path, active, created_at, updated_at";

/// Provides read operations (and test/seed inserts) for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// If `active` is `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (description, image_path, active)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List categories ordered by ID ascending, optionally only active ones.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Category>, sqlx::Error> {
        let query = if active_only {
            format!("SELECT {COLUMNS} FROM categories WHERE active = true ORDER BY id ASC")
        } else {
            format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC")
        };
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
