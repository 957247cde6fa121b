//! The session-scoped shopping cart.
//!
//! A cart is an insertion-ordered mapping from product ID (as a string key,
//! matching the session store's JSON representation) to a [`CartLine`]. The
//! surrounding session layer reads the whole cart, applies one mutation, and
//! writes the whole cart back; callers must serialize mutations per session,
//! the cart itself does no locking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Product, ProductId};

/// Smallest quantity accepted by a single add.
pub const MIN_LINE_QUANTITY: i64 = 1;
/// Largest quantity accepted by a single add.
pub const MAX_LINE_QUANTITY: i64 = 10;

/// Errors from cart mutations. The cart is unchanged when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be between {MIN_LINE_QUANTITY} and {MAX_LINE_QUANTITY}, got {0}")]
    QuantityOutOfRange(i64),

    #[error("product {0} is not in the cart")]
    LineNotFound(ProductId),
}

/// One cart entry: a product snapshot plus quantity.
///
/// Fields are copied from the resolved [`Product`] at add time; a later
/// catalog price change does not retroactively update an existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub sale_price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            sale_price: product.sale_price,
            img: product.img.clone(),
            quantity,
        }
    }
}

/// Check a requested quantity against the per-add bounds.
///
/// # Errors
///
/// Returns [`CartError::QuantityOutOfRange`] when `quantity` is outside
/// `[MIN_LINE_QUANTITY, MAX_LINE_QUANTITY]`.
pub fn validate_quantity(quantity: i64) -> Result<u32, CartError> {
    if !(MIN_LINE_QUANTITY..=MAX_LINE_QUANTITY).contains(&quantity) {
        return Err(CartError::QuantityOutOfRange(quantity));
    }
    // The range check guarantees the conversion fits.
    u32::try_from(quantity).map_err(|_| CartError::QuantityOutOfRange(quantity))
}

/// A session-scoped cart: product ID (string key) to cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: IndexMap<String, CartLine>,
}

impl Cart {
    /// Add `quantity` of `product` to the cart.
    ///
    /// A quantity outside `[MIN_LINE_QUANTITY, MAX_LINE_QUANTITY]` is
    /// rejected and the cart is left unchanged. If the product is already in
    /// the cart, its line quantity is incremented; the bound applies to each
    /// increment, not to the accumulated total.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOutOfRange`] for an invalid quantity.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        let quantity = validate_quantity(quantity)?;

        let key = product.id.to_string();
        if let Some(line) = self.lines.get_mut(&key) {
            line.quantity += quantity;
        } else {
            self.lines.insert(key, CartLine::snapshot(product, quantity));
        }
        Ok(())
    }

    /// Remove the line for `id`, returning the removed line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no such line exists; the cart
    /// is unchanged in that case.
    pub fn remove(&mut self, id: ProductId) -> Result<CartLine, CartError> {
        // shift_remove keeps the insertion order of the remaining lines
        self.lines
            .shift_remove(&id.to_string())
            .ok_or(CartError::LineNotFound(id))
    }

    /// Reset the cart to empty. Always succeeds.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.get(&id.to_string())
    }

    /// Iterate over cart lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }
}
