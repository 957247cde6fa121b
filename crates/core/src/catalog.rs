//! The read-only product catalog.
//!
//! The catalog is loaded once at startup and never mutated afterwards, so it
//! can be shared across request handlers without synchronization. Storage is
//! partitioned by category; product IDs are unique across the whole catalog.
//!
//! Two source document shapes are supported: the current data file maps
//! category names to product lists, while the legacy shape was a flat product
//! list with a `category` field per entry. Both normalize to the same
//! in-memory representation via [`CatalogDocument`].

use indexmap::IndexMap;
use serde::Deserialize;

use crate::types::{Product, ProductId};

/// Category bucket for flat-shape entries that carry no category of their own.
const UNCATEGORIZED: &str = "uncategorized";

/// One category partition: a name and its products, both in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub products: Vec<Product>,
}

/// The category-partitioned product catalog.
///
/// Lookups by ID are linear scans across all categories. Fine at the current
/// scale (tens of products); an ID index would be the upgrade path if the
/// dataset grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// A catalog source document in either supported shape.
///
/// Deserialization tries the category-keyed mapping first, then falls back to
/// the legacy flat list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    /// `{"floral": [product, ...], "woody": [...]}`
    Grouped(IndexMap<String, Vec<Product>>),
    /// `[product, product, ...]` with a `category` field per entry
    Flat(Vec<Product>),
}

impl From<CatalogDocument> for Catalog {
    fn from(document: CatalogDocument) -> Self {
        match document {
            CatalogDocument::Grouped(groups) => Self::from_grouped(groups),
            CatalogDocument::Flat(products) => Self::from_flat(products),
        }
    }
}

impl Catalog {
    /// Build a catalog from the category-keyed document shape.
    ///
    /// Each product's `category` field is overwritten with its grouping key,
    /// so the two source shapes are indistinguishable after load.
    fn from_grouped(groups: IndexMap<String, Vec<Product>>) -> Self {
        let categories = groups
            .into_iter()
            .map(|(name, mut products)| {
                for product in &mut products {
                    product.category = name.clone();
                }
                Category { name, products }
            })
            .collect();
        Self { categories }
    }

    /// Build a catalog from the legacy flat document shape.
    ///
    /// Products are grouped by their `category` field in first-seen order;
    /// entries with an empty category land under `"uncategorized"`.
    fn from_flat(products: Vec<Product>) -> Self {
        let mut groups: IndexMap<String, Vec<Product>> = IndexMap::new();
        for mut product in products {
            if product.category.is_empty() {
                product.category = UNCATEGORIZED.to_string();
            }
            groups
                .entry(product.category.clone())
                .or_default()
                .push(product);
        }
        Self::from_grouped(groups)
    }

    /// Find a product by ID, scanning all categories in order.
    ///
    /// Returns the first match; IDs are unique catalog-wide so at most one
    /// product can carry the queried ID.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|category| category.products.iter())
            .find(|product| product.id == id)
    }

    /// Products in the named category, matched case-insensitively.
    ///
    /// Returns an empty slice (not an error) when no category matches.
    #[must_use]
    pub fn find_by_category(&self, name: &str) -> &[Product] {
        self.categories
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(name))
            .map_or(&[], |category| category.products.as_slice())
    }

    /// All categories in document order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Iterate over every product in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories
            .iter()
            .flat_map(|category| category.products.iter())
    }

    /// Total number of products across all categories.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.products.len())
            .sum()
    }

    /// Whether the catalog holds no products at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_count() == 0
    }
}
