//! Catalog product record.

use atelier_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product record as served by the catalog.
///
/// Only the fields the cart arithmetic depends on are typed; everything else
/// the catalog sends (images, category, sizing, ...) is preserved verbatim in
/// [`extra`](Self::extra) so a persisted cart survives catalog schema drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub product_name: String,
    /// Unit price.
    pub product_price: Decimal,
    /// Remaining catalog fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Create a product with no extra catalog fields.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            product_name: name.into(),
            product_price: price,
            extra: serde_json::Map::new(),
        }
    }
}
