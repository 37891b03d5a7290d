//! Product listing, lookup, upsert-with-merge, delete and price-range query.

use storefront_core::catalog::{PriceRange, ENTITY_PRODUCT};
use storefront_core::error::CoreError;
use storefront_core::types::DbId;

use super::ServiceError;
use crate::models::product::{Product, SaveProduct};
use crate::store::ProductStore;

/// Apply an inbound payload to an existing product, field by field.
///
/// - `description`, `image_path`: replaced only when the patch carries a value.
/// - `active`: always taken from the patch. A missing checkbox and an explicit
///   `false` are indistinguishable on the wire, so both write `false`.
/// - `category_id`: replaced only when the patch names a category with an id.
///
/// `detail`, `price` and `stock` are never touched by an update.
pub fn merge_partial(existing: Product, patch: &SaveProduct) -> Product {
    let mut merged = existing;

    if let Some(description) = &patch.description {
        merged.description = Some(description.clone());
    }

    merged.active = patch.active;

    if let Some(image_path) = &patch.image_path {
        merged.image_path = Some(image_path.clone());
    }

    if let Some(category_id) = patch.category_id() {
        merged.category_id = Some(category_id);
    }

    merged
}

/// Product catalog operations over a [`ProductStore`].
#[derive(Debug, Clone)]
pub struct ProductCatalogService<S> {
    store: S,
}

impl<S: ProductStore> ProductCatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All products in store order; with `only_active`, inactive ones are
    /// dropped and the relative order of the rest is kept.
    pub async fn list_products(&self, only_active: bool) -> Result<Vec<Product>, ServiceError> {
        let mut products = self.store.find_all().await?;
        if only_active {
            products.retain(|p| p.active);
        }
        tracing::debug!(count = products.len(), only_active, "Listed products");
        Ok(products)
    }

    /// Look up a product by id. A missing product is `Ok(None)`, not an error.
    pub async fn get_product(&self, id: DbId) -> Result<Option<Product>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Insert `input` when it has no id, otherwise merge it into the existing
    /// row via [`merge_partial`] and persist the result.
    ///
    /// Fails with [`CoreError::NotFound`] when `input.id` names no product;
    /// nothing is written in that case.
    pub async fn save(&self, input: &SaveProduct) -> Result<Product, ServiceError> {
        let Some(id) = input.id else {
            let created = self.store.create(input).await?;
            tracing::info!(product_id = created.id, "Product created");
            return Ok(created);
        };

        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENTITY_PRODUCT,
                id,
            })?;

        let merged = merge_partial(existing, input);

        let updated = self
            .store
            .update(&merged)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENTITY_PRODUCT,
                id,
            })?;

        tracing::info!(product_id = id, active = updated.active, "Product updated");
        Ok(updated)
    }

    /// Delete by id. Returns whether a row was removed; a missing product is
    /// not an error here.
    pub async fn delete(&self, id: DbId) -> Result<bool, ServiceError> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!(product_id = id, "Product deleted");
        }
        Ok(deleted)
    }

    /// Products priced in `[low, high]`, ascending by description.
    ///
    /// Non-finite bounds are rejected with [`CoreError::Validation`]; an
    /// inverted range returns an empty list.
    pub async fn query_by_price_range(
        &self,
        low: f64,
        high: f64,
    ) -> Result<Vec<Product>, ServiceError> {
        let range = PriceRange::new(low, high)?;
        if range.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.find_by_price_range(range.low, range.high).await?)
    }
}
