//! Product and category route handlers.
//!
//! Read-only views over the catalog. An empty catalog (missing data file) is
//! not an error here: listings come back empty and lookups 404.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use perfume_shop_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every product in catalog order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().products().cloned().collect())
}

/// Product detail by ID.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .catalog()
        .find_by_id(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id} does not exist")))
}

/// List category names in catalog order.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog()
            .categories()
            .iter()
            .map(|category| category.name.clone())
            .collect(),
    )
}

/// Products in the named category, matched case-insensitively.
///
/// An unknown category yields an empty list, not a 404.
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Product>> {
    Json(state.catalog().find_by_category(&name).to_vec())
}
