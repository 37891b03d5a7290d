use std::sync::Arc;

use storefront_db::services::{PrincipalLookupService, ProductCatalogService};
use storefront_db::store::PgStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and the services' stores are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: storefront_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Product catalog operations.
    pub catalog: ProductCatalogService<PgStore>,
    /// Username -> principal lookup used by login.
    pub principals: PrincipalLookupService<PgStore>,
}

impl AppState {
    /// Wire the services onto `pool`.
    pub fn new(pool: storefront_db::DbPool, config: ServerConfig) -> Self {
        let store = PgStore::new(pool.clone());
        Self {
            pool,
            config: Arc::new(config),
            catalog: ProductCatalogService::new(store.clone()),
            principals: PrincipalLookupService::new(store),
        }
    }
}
