//! Unified error handling for the storefront API.
//!
//! Provides a unified `AppError` type that maps core errors to JSON error
//! responses. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use perfume_shop_core::{CartError, OrderError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or out-of-range input (quantity bounds, empty cart on preview).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found (unknown product, missing cart line).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session store read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::QuantityOutOfRange(_) => Self::Validation(err.to_string()),
            CartError::LineNotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::EmptyCart => Self::Validation(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(e) => {
                tracing::error!(error = %e, "Session store failure");
                "Internal server error".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "Request error");
                "Internal server error".to_string()
            }
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use perfume_shop_core::ProductId;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::Validation("invalid input".to_string());
        assert_eq!(err.to_string(), "Validation error: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Validation("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_cart_error_mapping() {
        assert_eq!(
            get_status(CartError::QuantityOutOfRange(11).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(CartError::LineNotFound(ProductId::new(1)).into()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_order_error_mapping() {
        assert_eq!(get_status(OrderError::EmptyCart.into()), StatusCode::BAD_REQUEST);
    }
}
