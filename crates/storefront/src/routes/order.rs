//! Order route handlers.

use axum::Json;
use tower_sessions::Session;
use tracing::instrument;

use perfume_shop_core::{Cart, OrderPreview};

use crate::error::Result;
use crate::models::session_keys;

/// Cost breakdown for the current cart.
///
/// Derived on demand, never stored. An empty cart is a 400 validation error.
#[instrument(skip(session))]
pub async fn preview(session: Session) -> Result<Json<OrderPreview>> {
    let cart = session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default();

    let preview = OrderPreview::from_cart(&cart)?;
    Ok(Json(preview))
}
