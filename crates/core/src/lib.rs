//! Perfume Shop Core - Shared domain library.
//!
//! This crate provides the domain types and logic used across all perfume
//! shop components:
//! - `storefront` - Public-facing JSON API
//! - `integration-tests` - End-to-end tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! async. Reading the catalog data file, session handling, and request
//! routing all live in the storefront crate; this keeps the core usable
//! anywhere and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the `Product` record
//! - [`catalog`] - The read-only, category-partitioned product catalog
//! - [`cart`] - The session-scoped shopping cart and its mutations
//! - [`order`] - Order preview derivation (totals and shipping)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod types;

pub use cart::{Cart, CartError, CartLine, MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};
pub use catalog::{Catalog, CatalogDocument, Category};
pub use order::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, OrderError, OrderItem, OrderPreview};
pub use types::*;
