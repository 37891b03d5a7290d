//! Product entity model and the inbound save payload.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// A persisted row from the `products` table. Always carries an id.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub image_path: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Reference to a category by id, as submitted by a form.
///
/// The id may be absent when the form's category selector was left empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryRef {
    pub id: Option<DbId>,
}

/// Inbound product payload for `save`.
///
/// `id == None` means insert; otherwise the payload is merged into the
/// existing row. `active` defaults to `false` when omitted: an unchecked
/// checkbox is never sent, so absence is read as an explicit `false`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaveProduct {
    pub id: Option<DbId>,
    pub description: Option<String>,
    pub detail: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i32,
    pub image_path: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub category: Option<CategoryRef>,
}

impl SaveProduct {
    /// The category id to write, if the payload names one.
    pub fn category_id(&self) -> Option<DbId> {
        self.category.as_ref().and_then(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_requires_inner_id() {
        let mut input = SaveProduct::default();
        assert_eq!(input.category_id(), None);

        input.category = Some(CategoryRef { id: None });
        assert_eq!(input.category_id(), None);

        input.category = Some(CategoryRef { id: Some(3) });
        assert_eq!(input.category_id(), Some(3));
    }

    #[test]
    fn omitted_active_deserializes_as_false() {
        let input: SaveProduct =
            serde_json::from_value(serde_json::json!({ "id": 4, "description": "Mouse" }))
                .unwrap();
        assert_eq!(input.id, Some(4));
        assert!(!input.active);
        assert_eq!(input.image_path, None);
        assert_eq!(input.price, 0.0);
    }
}
