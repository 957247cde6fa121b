//! Root and health route handlers.

use axum::Json;
use serde::Serialize;

/// Welcome message payload.
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

/// API welcome message.
pub async fn index() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Perfume Shop API",
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}
