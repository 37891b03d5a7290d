//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that support an `active_only` flag.
#[derive(Debug, Deserialize)]
pub struct ActiveOnlyParams {
    #[serde(default)]
    pub active_only: bool,
}

/// Inclusive price bounds (`?low=&high=`).
#[derive(Debug, Deserialize)]
pub struct PriceRangeParams {
    pub low: f64,
    pub high: f64,
}
