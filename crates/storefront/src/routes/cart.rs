//! Cart route handlers.
//!
//! The cart lives in the session under one key and is replaced wholesale on
//! every mutation (get-then-replace semantics; see `models::session`). Each
//! handler loads the cart, applies exactly one core mutation, and writes the
//! result back, so a failed operation leaves the stored cart untouched.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use perfume_shop_core::{Cart, ProductId, cart::validate_quantity};

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::state::AppState;

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

const fn default_quantity() -> i64 {
    1
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Cart count badge payload.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub total_quantity: u64,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, empty if none exists yet.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Replace the session's cart wholesale.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Return the current cart (empty mapping if none exists yet).
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<Cart>> {
    let cart = load_cart(&session).await?;
    Ok(Json(cart))
}

/// Total quantity across the cart, for the cart badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCount>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartCount {
        total_quantity: cart.total_quantity(),
    }))
}

/// Add a product to the cart.
///
/// Quantity is validated before the product is resolved, so an out-of-range
/// quantity reports 400 even for an unknown product. Returns the full updated
/// cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<Cart>> {
    validate_quantity(body.quantity)?;

    let product = state
        .catalog()
        .find_by_id(body.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {} does not exist", body.product_id)))?;

    let mut cart = load_cart(&session).await?;
    cart.add(product, body.quantity)?;
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}

/// Remove a cart line. Returns the full updated cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(body): Json<RemoveFromCartRequest>,
) -> Result<Json<Cart>> {
    let mut cart = load_cart(&session).await?;
    cart.remove(body.product_id)?;
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}

/// Empty the cart. Always succeeds, even when already empty.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Json<Cart>> {
    let mut cart = load_cart(&session).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Json(cart))
}
