//! Catalog query helpers shared by the persistence and HTTP layers.
//!
//! Price-range queries are inclusive on both ends and ordered ascending by
//! description. Bounds must be finite; an inverted range (`low > high`) is a
//! legal query that simply matches nothing.

use crate::error::CoreError;

/// Entity name used in catalog `NotFound` errors.
pub const ENTITY_PRODUCT: &str = "Product";

/// Entity name used in category `NotFound` errors.
pub const ENTITY_CATEGORY: &str = "Category";

/// Inclusive `[low, high]` price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    /// Build a range, rejecting NaN and infinite bounds.
    pub fn new(low: f64, high: f64) -> Result<Self, CoreError> {
        let range = Self { low, high };
        range.validate()?;
        Ok(range)
    }

    /// Check that both bounds are finite numbers.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(CoreError::Validation(format!(
                "Price bounds must be finite numbers, got [{}, {}]",
                self.low, self.high
            )));
        }
        Ok(())
    }

    /// Whether `price` falls inside the range, bounds included.
    pub fn contains(&self, price: f64) -> bool {
        self.low <= price && price <= self.high
    }

    /// True when no price can match (`low > high`).
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}
