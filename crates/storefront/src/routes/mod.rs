//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - API welcome message
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - All products, catalog order
//! GET  /products/{id}          - Product detail
//! GET  /categories             - Category names
//! GET  /categories/{name}      - Products in a category (case-insensitive)
//!
//! # Cart (session-scoped)
//! GET  /cart                   - Current cart mapping
//! GET  /cart/count             - Total quantity badge
//! POST /cart/add               - Add a product to the cart
//! POST /cart/remove            - Remove a cart line
//! POST /cart/clear             - Empty the cart
//!
//! # Order
//! GET  /order/preview          - Cost breakdown for the current cart
//! ```
//!
//! All responses are JSON; errors come back as `{"error": "..."}` with the
//! matching status code. Mutations on unknown routes/methods get axum's
//! built-in 404/405.

pub mod cart;
pub mod home;
pub mod order;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::categories))
        .route("/{name}", get(products::by_category))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .nest("/cart", cart_routes())
        .route("/order/preview", get(order::preview))
}

/// Build the complete application: routes, session layer, tracing, state.
///
/// Used by both the binary and the integration tests.
pub fn app(state: AppState) -> Router {
    let session_layer = crate::middleware::create_session_layer(state.config());

    routes()
        .layer(TraceLayer::new_for_http())
        .layer(session_layer)
        .with_state(state)
}
