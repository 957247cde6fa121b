//! The catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A purchasable product, immutable after catalog load.
///
/// Prices are minor-unit integers (KRW, no decimals). `original_price` is
/// informational only (strike-through display); all computation uses
/// `sale_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique across the entire catalog, regardless of category.
    pub id: ProductId,
    pub name: String,
    pub sale_price: u32,
    #[serde(default)]
    pub original_price: u32,
    /// Opaque image reference; never dereferenced by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Grouping key. Filled in from the grouping key when the catalog source
    /// is category-keyed; required per entry when the source is a flat list.
    #[serde(default)]
    pub category: String,
}
