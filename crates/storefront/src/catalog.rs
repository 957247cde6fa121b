//! Catalog loading from the static data file.
//!
//! The catalog is read once at startup. A missing or malformed data file
//! yields an empty catalog rather than a startup failure; every route
//! tolerates empty results downstream.

use std::path::Path;

use perfume_shop_core::{Catalog, CatalogDocument};

/// Load the product catalog from `path`.
///
/// Returns `Catalog::default()` (empty) and logs a warning when the file is
/// missing or does not parse as either supported document shape.
#[must_use]
pub fn load_catalog(path: &Path) -> Catalog {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Catalog file unreadable, starting with an empty catalog");
            return Catalog::default();
        }
    };

    match serde_json::from_str::<CatalogDocument>(&raw) {
        Ok(document) => Catalog::from(document),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Catalog file malformed, starting with an empty catalog");
            Catalog::default()
        }
    }
}
