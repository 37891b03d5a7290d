//! Repository for the `products` table.

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::product::{Product, SaveProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, description, detail, price, stock, image_path, active, \
                       created_at, updated_at";

/// Provides CRUD and price-range queries for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product exactly as supplied, returning the created row.
    ///
    /// `input.id` is ignored; the database assigns the id.
    pub async fn create(pool: &PgPool, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (category_id, description, detail, price, stock, image_path, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.category_id())
            .bind(&input.description)
            .bind(&input.detail)
            .bind(input.price)
            .bind(input.stock)
            .bind(&input.image_path)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a product by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Overwrite every writable column of an existing row with `product`.
    ///
    /// Returns `None` if no row with `product.id` exists.
    pub async fn update(pool: &PgPool, product: &Product) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                category_id = $2,
                description = $3,
                detail = $4,
                price = $5,
                stock = $6,
                image_path = $7,
                active = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(product.id)
            .bind(product.category_id)
            .bind(&product.description)
            .bind(&product.detail)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.image_path)
            .bind(product.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List products priced within `[low, high]` (inclusive), ordered by
    /// description.
    ///
    /// Ordering uses the byte-wise `"C"` collation so the result does not
    /// depend on the database locale. Products without a description sort
    /// last; ties are broken by id.
    pub async fn list_by_price_range(
        pool: &PgPool,
        low: f64,
        high: f64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE price BETWEEN $1 AND $2
             ORDER BY description COLLATE \"C\" ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(low)
            .bind(high)
            .fetch_all(pool)
            .await
    }
}
