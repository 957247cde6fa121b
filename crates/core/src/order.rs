//! Order preview derivation.
//!
//! An [`OrderPreview`] is an ephemeral view computed on demand from a cart
//! snapshot; it is never stored. Totals use u64 arithmetic so line totals
//! cannot overflow at any representable price and quantity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartLine};

/// Subtotal (minor units) at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: u64 = 50_000;
/// Flat shipping fee (minor units) below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: u64 = 3_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("cannot preview an order for an empty cart")]
    EmptyCart,
}

/// One preview line: the cart line plus its computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(flatten)]
    pub line: CartLine,
    pub total_price: u64,
}

/// Cost breakdown for the current cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPreview {
    pub order_items: Vec<OrderItem>,
    pub total_quantity: u64,
    pub subtotal_price: u64,
    pub shipping_fee: u64,
    pub final_total_price: u64,
}

impl OrderPreview {
    /// Derive a preview from the given cart. The cart is not mutated.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when the cart holds no lines.
    pub fn from_cart(cart: &Cart) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order_items: Vec<OrderItem> = cart
            .lines()
            .map(|line| OrderItem {
                line: line.clone(),
                total_price: u64::from(line.sale_price) * u64::from(line.quantity),
            })
            .collect();

        let subtotal_price: u64 = order_items.iter().map(|item| item.total_price).sum();
        let total_quantity = cart.total_quantity();
        let shipping_fee = if subtotal_price >= FREE_SHIPPING_THRESHOLD {
            0
        } else {
            FLAT_SHIPPING_FEE
        };

        Ok(Self {
            order_items,
            total_quantity,
            subtotal_price,
            shipping_fee,
            final_total_price: subtotal_price + shipping_fee,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Product, ProductId};

    fn cart_with(lines: &[(i32, u32, i64)]) -> Cart {
        let mut cart = Cart::default();
        for &(id, sale_price, quantity) in lines {
            let product = Product {
                id: ProductId::new(id),
                name: format!("Perfume {id}"),
                sale_price,
                original_price: sale_price,
                img: None,
                category: "floral".to_string(),
            };
            cart.add(&product, quantity).unwrap();
        }
        cart
    }

    #[test]
    fn test_empty_cart_is_a_validation_error() {
        assert_eq!(OrderPreview::from_cart(&Cart::default()), Err(OrderError::EmptyCart));
    }

    #[test]
    fn test_breakdown_below_free_shipping() {
        // {A: 5800 x 2, B: 15000 x 1}
        let cart = cart_with(&[(1, 5800, 2), (2, 15000, 1)]);
        let preview = OrderPreview::from_cart(&cart).unwrap();

        assert_eq!(preview.subtotal_price, 26_600);
        assert_eq!(preview.total_quantity, 3);
        assert_eq!(preview.shipping_fee, 3_000);
        assert_eq!(preview.final_total_price, 29_600);

        let totals: Vec<_> = preview.order_items.iter().map(|i| i.total_price).collect();
        assert_eq!(totals, [11_600, 15_000]);
    }

    #[test]
    fn test_free_shipping_at_exact_threshold() {
        let cart = cart_with(&[(1, 25_000, 2)]);
        let preview = OrderPreview::from_cart(&cart).unwrap();
        assert_eq!(preview.subtotal_price, 50_000);
        assert_eq!(preview.shipping_fee, 0);
        assert_eq!(preview.final_total_price, 50_000);
    }

    #[test]
    fn test_shipping_charged_just_below_threshold() {
        let cart = cart_with(&[(1, 49_999, 1)]);
        let preview = OrderPreview::from_cart(&cart).unwrap();
        assert_eq!(preview.shipping_fee, FLAT_SHIPPING_FEE);
        assert_eq!(preview.final_total_price, 52_999);
    }

    #[test]
    fn test_preview_does_not_mutate_cart() {
        let cart = cart_with(&[(1, 5800, 2)]);
        let before = cart.clone();
        let _ = OrderPreview::from_cart(&cart).unwrap();
        assert_eq!(cart, before);
    }

    #[test]
    fn test_items_serialize_flat_with_total_price() {
        let cart = cart_with(&[(1, 5800, 2)]);
        let preview = OrderPreview::from_cart(&cart).unwrap();
        let json = serde_json::to_value(&preview).unwrap();

        let item = &json["order_items"][0];
        assert_eq!(item["id"], 1);
        assert_eq!(item["sale_price"], 5800);
        assert_eq!(item["quantity"], 2);
        assert_eq!(item["total_price"], 11_600);
        assert_eq!(json["subtotal_price"], 11_600);
    }
}
