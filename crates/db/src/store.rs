//! Storage seams consumed by the services.
//!
//! [`ProductStore`] and [`UserStore`] describe what the services need from
//! persistence. [`PgStore`] implements both on top of the repositories; tests
//! substitute an in-memory store.

use std::future::Future;

use sqlx::PgPool;
use storefront_core::types::DbId;

use crate::models::product::{Product, SaveProduct};
use crate::models::user::UserWithRoles;
use crate::repositories::{ProductRepo, RoleRepo, UserRepo};

/// Product persistence: point lookup, full scan, insert, update, delete and
/// the price-range query.
///
/// `create` and `update` together form the upsert: an input without an id is
/// inserted, an existing row is overwritten in place keeping its id.
pub trait ProductStore: Send + Sync {
    fn find_by_id(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Product>, sqlx::Error>> + Send;

    /// All products, ordered by id.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Product>, sqlx::Error>> + Send;

    fn create(
        &self,
        input: &SaveProduct,
    ) -> impl Future<Output = Result<Product, sqlx::Error>> + Send;

    /// Returns `None` when the row no longer exists.
    fn update(
        &self,
        product: &Product,
    ) -> impl Future<Output = Result<Option<Product>, sqlx::Error>> + Send;

    /// Returns whether a row was removed.
    fn delete(&self, id: DbId) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;

    /// Products with `low <= price <= high`, ascending by description.
    fn find_by_price_range(
        &self,
        low: f64,
        high: f64,
    ) -> impl Future<Output = Result<Vec<Product>, sqlx::Error>> + Send;
}

/// User persistence needed for principal lookup.
pub trait UserStore: Send + Sync {
    /// Exact username match, with the user's roles in grant order.
    fn find_user_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<UserWithRoles>, sqlx::Error>> + Send;
}

/// PostgreSQL-backed store delegating to the repository structs.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductStore for PgStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list(&self.pool).await
    }

    async fn create(&self, input: &SaveProduct) -> Result<Product, sqlx::Error> {
        ProductRepo::create(&self.pool, input).await
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::update(&self.pool, product).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ProductRepo::delete(&self.pool, id).await
    }

    async fn find_by_price_range(&self, low: f64, high: f64) -> Result<Vec<Product>, sqlx::Error> {
        ProductRepo::list_by_price_range(&self.pool, low, high).await
    }
}

impl UserStore for PgStore {
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserWithRoles>, sqlx::Error> {
        let Some(user) = UserRepo::find_by_username(&self.pool, username).await? else {
            return Ok(None);
        };
        let roles = RoleRepo::list_for_user(&self.pool, user.id).await?;
        Ok(Some(UserWithRoles { user, roles }))
    }
}
