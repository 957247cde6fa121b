//! Session-related types and keys.
//!
//! The session is the cart's storage scope: the whole cart is read from the
//! session, mutated, and written back as one value. The session store does
//! not offer per-key atomic updates, so concurrent requests on the same
//! session can race read-modify-write; clients are expected to issue cart
//! mutations for one session sequentially.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the session's cart (string product ID to cart line).
    pub const CART: &str = "cart";
}
