//! Catalog and principal services.
//!
//! Services are generic over the [`crate::store`] traits and hold no state of
//! their own; every call is a function of the store contents and its inputs.
//! Mutations assume the store provides per-call atomicity; two concurrent
//! saves of the same product are last-write-wins.

pub mod catalog;
pub mod principal;

#[cfg(test)]
pub(crate) mod memory;

pub use catalog::{merge_partial, ProductCatalogService};
pub use principal::PrincipalLookupService;

use storefront_core::error::CoreError;

/// Error returned by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain-level error (not found, validation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The underlying store failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
